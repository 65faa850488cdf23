//! Configuration management for phone-intel.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present; nothing is printed to stdout, which the
//! MCP transport and one-shot JSON output both use.

use crate::domain::CallingCode;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for phone-intel.
#[derive(Debug, Clone)]
pub struct Config {
    /// Calling code assumed for input without a leading `+` (no default;
    /// such input is refused when unset)
    pub default_country_code: Option<CallingCode>,

    /// JSON file replacing the bundled region table
    pub region_data_path: Option<PathBuf>,

    /// Longest raw input accepted, in bytes (default: 64)
    pub max_input_length: usize,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All environment variables are optional:
    /// - `DEFAULT_COUNTRY_CODE`: calling code such as `1` or `+91`
    /// - `REGION_DATA_PATH`: path to a region table JSON file
    /// - `MAX_INPUT_LENGTH`: longest accepted input (default: 64)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let default_country_code = match env::var("DEFAULT_COUNTRY_CODE") {
            Ok(val) if !val.trim().is_empty() => {
                Some(val.parse::<CallingCode>().map_err(|e| ConfigError::InvalidValue {
                    var: "DEFAULT_COUNTRY_CODE".to_string(),
                    reason: e.to_string(),
                })?)
            }
            _ => None,
        };

        let region_data_path = env::var("REGION_DATA_PATH")
            .ok()
            .filter(|val| !val.trim().is_empty())
            .map(PathBuf::from);

        let max_input_length = Self::parse_env_usize("MAX_INPUT_LENGTH", 64)?;
        if max_input_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_INPUT_LENGTH".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            default_country_code,
            region_data_path,
            max_input_length,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_country_code: None,
            region_data_path: None,
            max_input_length: 64,
            log_level: "warn".to_string(),
        }
    }
}
