// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional TOML configuration.
//!
//! Looked up at `LIGHTNING_CONFIG`, else `.lightning/config.toml` under the
//! current directory:
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [cron]
//! default = "0 0 * * *"
//! ```

use std::path::{Path, PathBuf};

use lightning_trigger::DEFAULT_CRON_EXPRESSION;
use serde::Deserialize;
use thiserror::Error;

use crate::output::OutputFormat;

const DEFAULT_CONFIG_PATH: &str = ".lightning/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub cron: CronConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Used when `-o` is not given
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CronConfig {
    /// Previous expression handed to `cron build` when `--previous` is absent
    pub default: Option<String>,
}

impl Config {
    /// Load from `LIGHTNING_CONFIG` or the default location.
    ///
    /// An explicitly configured path must exist; the default location is
    /// optional.
    pub fn load() -> Result<Self, ConfigError> {
        match crate::env::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Output format after applying the command-line override.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output.format).unwrap_or_default()
    }

    pub fn default_cron(&self) -> &str {
        self.cron
            .default
            .as_deref()
            .unwrap_or(DEFAULT_CRON_EXPRESSION)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
