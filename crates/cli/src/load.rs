// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading attempt and work-order records from files or stdin.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Source argument meaning "read standard input".
pub const STDIN: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// `.toml` files are TOML; everything else, stdin included, is JSON.
    pub fn from_source(source: &str) -> Self {
        match Path::new(source).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },

    #[error("invalid TOML in {origin}: {source}")]
    Toml {
        origin: String,
        source: toml::de::Error,
    },
}

/// Read and deserialize one record from a path, or from stdin for `-`.
pub fn read_record<T: DeserializeOwned>(source: &str) -> Result<T, LoadError> {
    let origin = if source == STDIN {
        "stdin".to_string()
    } else {
        source.to_string()
    };
    let content = read_source(source).map_err(|e| LoadError::Read {
        origin: origin.clone(),
        source: e,
    })?;
    tracing::debug!(%origin, bytes = content.len(), "read record");
    parse_record(&content, Format::from_source(source), &origin)
}

pub fn parse_record<T: DeserializeOwned>(
    content: &str,
    format: Format,
    origin: &str,
) -> Result<T, LoadError> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|source| LoadError::Json {
            origin: origin.to_string(),
            source,
        }),
        Format::Toml => toml::from_str(content).map_err(|source| LoadError::Toml {
            origin: origin.to_string(),
            source,
        }),
    }
}

fn read_source(source: &str) -> std::io::Result<String> {
    if source == STDIN {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source)
    }
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
