// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI coloring for text output.

use std::io::IsTerminal;

use lightning_core::RunStatus;

const RESET: &str = "\x1b[0m";

/// Palette used by text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Table headers: steel blue
    Header,
    /// Secondary values such as durations: dark grey
    Muted,
    Good,
    Waiting,
    Bad,
}

impl Tone {
    fn escape(self) -> &'static str {
        match self {
            Tone::Header => "\x1b[38;5;74m",
            Tone::Muted => "\x1b[38;5;240m",
            Tone::Good => "\x1b[32m",
            Tone::Waiting => "\x1b[33m",
            Tone::Bad => "\x1b[31m",
        }
    }

    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.escape())
    }

    /// Tone for a status cell. Keys on the first word so padded cells keep
    /// their color; non-status text gets none.
    pub fn for_status(text: &str) -> Option<Tone> {
        let status: RunStatus = text.split_whitespace().next()?.parse().ok()?;
        Some(match status {
            RunStatus::Success => Tone::Good,
            RunStatus::Pending => Tone::Waiting,
            RunStatus::Failure | RunStatus::Timeout | RunStatus::Crash => Tone::Bad,
        })
    }
}

/// Whether stdout output should carry color.
///
/// `NO_COLOR=1` disables, then `COLOR=1` forces, otherwise only a TTY gets color.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    crate::env::force_color() || std::io::stdout().is_terminal()
}

/// Color a rollup status when `colorize` is set.
pub fn status(text: &str, colorize: bool) -> String {
    match Tone::for_status(text) {
        Some(tone) if colorize => tone.paint(text),
        _ => text.to_string(),
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
