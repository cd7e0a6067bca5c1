use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::types::Config;
use crate::convert::MAX_FRACTION_DIGITS;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/unitconv/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("unitconv").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load(catalog: &Catalog) -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path(), catalog)
    }

    /// Loads and validates configuration from `path`.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load_from(path: &Path, catalog: &Catalog) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate(catalog)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the configuration against the unit catalog.
    ///
    /// Checks:
    /// - The default category exists
    /// - Default units belong to the default category
    /// - Fraction digits and tick rate are within range
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        let category = match &self.defaults.category {
            Some(name) => catalog.category(name).ok_or_else(|| ConfigError::ValidationError {
                message: format!("Default category '{}' not found in catalog", name),
            })?,
            None => catalog.first_category(),
        };

        for unit in [&self.defaults.input_unit, &self.defaults.output_unit]
            .into_iter()
            .flatten()
        {
            if category.unit(unit).is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Default unit '{}' not found in category '{}'",
                        unit, category.name
                    ),
                });
            }
        }

        if self.display.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_fraction_digits must be at most {}, got {}",
                    MAX_FRACTION_DIGITS, self.display.max_fraction_digits
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
