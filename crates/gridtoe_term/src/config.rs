//! Frontend configuration file.
//!
//! ```toml
//! size = 5
//! mode = 2
//! seed = 42
//! ```

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use gridtoe::{GameSetup, SetupError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from `gridtoe.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TermConfig {
    /// Board edge length.
    #[serde(default = "default_size")]
    size: u32,

    /// Game mode code (1 or 2).
    #[serde(default = "default_mode")]
    mode: u32,

    /// Optional seed for the AI.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_size() -> u32 {
    3
}

fn default_mode() -> u32 {
    2
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            mode: default_mode(),
            seed: None,
        }
    }
}

impl TermConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, mode = config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolves the game setup. The query string beats flags, flags beat
    /// the file.
    #[instrument(skip(self, cli))]
    pub fn resolve_setup(&self, cli: &Cli) -> Result<GameSetup, SetupError> {
        if let Some(query) = &cli.query {
            return GameSetup::from_query(query);
        }
        let size = cli.size.clone().unwrap_or_else(|| self.size.to_string());
        let mode = cli.mode.clone().unwrap_or_else(|| self.mode.to_string());
        GameSetup::parse(&size, &mode)
    }

    /// Resolves the AI seed, flag first.
    pub fn resolve_seed(&self, cli: &Cli) -> Option<u64> {
        cli.seed.or(self.seed)
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
