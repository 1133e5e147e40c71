//! Configuration management for the contact assistant.
//!
//! All settings are optional and read from environment variables, with an
//! optional `.env` file loaded first.

use crate::error::{ConfigError, ConfigResult};
use crate::services::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;

/// Largest accepted birthday look-ahead window.
pub const MAX_BIRTHDAY_WINDOW_DAYS: i64 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: i64,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_BIRTHDAY_WINDOW_DAYS`: Birthday window, 0-365 (default: 7)
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("ASSISTANT_LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let birthday_window_days = Self::parse_env_i64(
            "ASSISTANT_BIRTHDAY_WINDOW_DAYS",
            defaults.birthday_window_days,
        )?;

        if !(0..=MAX_BIRTHDAY_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        Ok(Config {
            log_level,
            birthday_window_days,
            prompt,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
        }
    }
}
