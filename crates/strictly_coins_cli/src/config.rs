//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CoinsConfig {
    /// Largest coin count that is drawn as a board and table.
    #[serde(default = "default_display_limit")]
    display_limit: usize,

    /// Default lower bound for random coins.
    #[serde(default = "default_random_min")]
    random_min: u64,

    /// Default upper bound for random coins.
    #[serde(default = "default_random_max")]
    random_max: u64,

    /// Pause between replayed engine moves.
    #[serde(default)]
    replay_delay_ms: u64,

    /// Display name of the opening seat.
    #[serde(default = "default_first_name")]
    first_name: String,

    /// Display name of the other seat.
    #[serde(default = "default_second_name")]
    second_name: String,
}

#[instrument]
fn default_display_limit() -> usize {
    10
}

#[instrument]
fn default_random_min() -> u64 {
    1
}

#[instrument]
fn default_random_max() -> u64 {
    50
}

#[instrument]
fn default_first_name() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_second_name() -> String {
    "Player 2".to_string()
}

impl Default for CoinsConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            random_min: default_random_min(),
            random_max: default_random_max(),
            replay_delay_ms: 0,
            first_name: default_first_name(),
            second_name: default_second_name(),
        }
    }
}

impl CoinsConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.random_max <= config.random_min {
            return Err(ConfigError::new(format!(
                "random_max ({}) must be greater than random_min ({})",
                config.random_max, config.random_min
            )));
        }

        info!(display_limit = config.display_limit, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the seat names, keeping defaults for `None`.
    pub fn with_names(mut self, first: Option<String>, second: Option<String>) -> Self {
        if let Some(first) = first {
            self.first_name = first;
        }
        if let Some(second) = second {
            self.second_name = second;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
