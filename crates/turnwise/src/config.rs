//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use turnwise_tictactoe::{DEFAULT_MAX_NAME_LEN, DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};

/// Player settings for a terminal game.
///
/// Board size is fixed at 3x3 and deliberately not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Display name for X.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Display name for O.
    #[serde(default = "default_player_o")]
    player_o: String,

    /// Longest accepted player name, in characters.
    #[serde(default = "default_max_name_len")]
    max_name_len: usize,
}

#[instrument]
fn default_player_x() -> String {
    DEFAULT_X_NAME.to_string()
}

#[instrument]
fn default_player_o() -> String {
    DEFAULT_O_NAME.to_string()
}

#[instrument]
fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}

impl GameConfig {
    /// Creates a configuration with every default.
    #[instrument]
    pub fn new() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            max_name_len: default_max_name_len(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_x = %config.player_x,
            player_o = %config.player_o,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces player names with command-line values where given.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        self
    }

    /// Builds the player registry, validating names like a rename would.
    #[instrument(skip(self))]
    pub fn player_registry(&self) -> Result<PlayerRegistry, ConfigError> {
        PlayerRegistry::with_names(&self.player_x, &self.player_o, self.max_name_len)
            .map_err(|e| ConfigError::new(format!("Invalid player name: {}", e)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
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
