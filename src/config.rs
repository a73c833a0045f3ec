//! Configuration management for wardbook.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally read from a `.env` file first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the wardbook binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Seed the book with sample patients on start-up (default: true)
    pub seed_sample_data: bool,

    /// Pretty-print JSON output (default: true)
    pub pretty_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `WARDBOOK_SEED_SAMPLE_DATA`: true/false (default: true)
    /// - `WARDBOOK_PRETTY_JSON`: true/false (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let seed_sample_data = Self::parse_env_bool("WARDBOOK_SEED_SAMPLE_DATA", true)?;
        let pretty_json = Self::parse_env_bool("WARDBOOK_PRETTY_JSON", true)?;

        Ok(Config {
            log_level,
            seed_sample_data,
            pretty_json,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    ///
    /// Accepts `true/false`, `1/0` and `yes/no`, case-insensitively.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            seed_sample_data: true,
            pretty_json: true,
        }
    }
}
