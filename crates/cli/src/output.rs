// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write a value as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render an optional cell, using `-` for absent values.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// How a command renders its result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Render {
    pub format: OutputFormat,
    pub colorize: bool,
}

#[cfg(test)]
impl Render {
    /// Uncolored text.
    pub fn plain_text() -> Self {
        Self {
            format: OutputFormat::Text,
            colorize: false,
        }
    }

    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            colorize: false,
        }
    }
}
