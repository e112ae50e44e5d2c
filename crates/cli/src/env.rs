// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Logging ---

/// Log filter directives (`EnvFilter` syntax), e.g. `debug` or
/// `lightning_trigger=debug`.
pub fn log_filter() -> Option<String> {
    std::env::var("LIGHTNING_LOG").ok().filter(|s| !s.is_empty())
}

// --- Config ---

/// Explicit config file path, overriding `.lightning/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("LIGHTNING_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
