//! Configuration management for the residence tracker.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for a tracker session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt printed before each input line (default: "> ")
    pub prompt: String,

    /// Longest accepted input line in bytes (default: 1024)
    pub max_input_length: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESIDENCE_TRACKER_LOG_LEVEL`: Logging level (default: "error")
    /// - `RESIDENCE_TRACKER_PROMPT`: Input prompt (default: "> ")
    /// - `RESIDENCE_TRACKER_MAX_INPUT_LENGTH`: Max line length (default: 1024)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which is reserved for command output
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level =
            env::var("RESIDENCE_TRACKER_LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("RESIDENCE_TRACKER_PROMPT").unwrap_or(defaults.prompt);
        let max_input_length = Self::parse_env_usize(
            "RESIDENCE_TRACKER_MAX_INPUT_LENGTH",
            defaults.max_input_length,
        )?;

        if max_input_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "RESIDENCE_TRACKER_MAX_INPUT_LENGTH".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(Config {
            log_level,
            prompt,
            max_input_length,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            log_level: "error".to_string(),
            prompt: "> ".to_string(),
            max_input_length: 1024,
        }
    }
}
