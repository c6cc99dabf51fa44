//! CLI configuration file.
//!
//! The file is TOML and every key is optional:
//!
//! ```toml
//! default_format = "table"     # table, json, csv, minimal
//! precision = 6                # decimal places for amounts
//! default_frequency = "annual" # used when --frequency is not given
//! show_schedule = false        # print payment dates with `price`
//! ```
//!
//! The file is looked up at `--config`, then `$FIXBOND_CONFIG`, then
//! `<config dir>/fixbond/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fixbond_core::types::Frequency;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Largest accepted `precision`.
pub const MAX_PRECISION: usize = 12;

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format when `--format` is not given.
    pub default_format: OutputFormat,
    /// Decimal places for prices and amounts.
    pub precision: usize,
    /// Frequency used when `--frequency` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_frequency: Option<Frequency>,
    /// Print the payment schedule along with the price.
    pub show_schedule: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Table,
            precision: 6,
            default_frequency: None,
            show_schedule: false,
        }
    }
}

impl CliConfig {
    /// Parses a configuration document.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.message().to_string())?;
        if config.precision > MAX_PRECISION {
            return Err(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                config.precision
            ));
        }
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads the configuration file at `path`.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|reason| CliError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Resolves and loads the configuration.
    ///
    /// An explicitly named file must exist. The per-user file is optional
    /// and its absence yields the defaults.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            tracing::debug!("Loaded configuration from {}", path.display());
            return Ok((config, Some(path.to_path_buf())));
        }

        match default_path() {
            Some(path) if path.is_file() => {
                let config = Self::load(&path)?;
                tracing::debug!("Loaded configuration from {}", path.display());
                Ok((config, Some(path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }
}

/// Returns the per-user configuration file location.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fixbond").join("config.toml"))
}
