//! Session configuration, loadable from TOML.

use crate::rules::StalemateRule;
use crate::types::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a [`GameSession`](crate::GameSession).
///
/// Every field has a default, so an empty file is a valid config:
///
/// ```toml
/// computer_player = "Black"
/// computer_delay_ms = 1000
/// seed = 42
/// stalemate_rule = "Draw"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side the computer plays in one-player mode.
    computer_player: Player,

    /// Delay between choosing and committing a computer move, in milliseconds.
    computer_delay_ms: u64,

    /// RNG seed for the computer player; `None` draws one from entropy.
    seed: Option<u64>,

    /// How a mutual blockade is scored.
    stalemate_rule: StalemateRule,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            computer_player: Player::Black,
            computer_delay_ms: 1000,
            seed: None,
            stalemate_rule: StalemateRule::Draw,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the computer's side.
    pub fn with_computer_player(mut self, player: Player) -> Self {
        self.computer_player = player;
        self
    }

    /// Overrides the computer's move delay.
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the stalemate rule.
    pub fn with_stalemate_rule(mut self, rule: StalemateRule) -> Self {
        self.stalemate_rule = rule;
        self
    }

    /// The computer's move delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
