//! Game configuration loaded from TOML.
//!
//! ```toml
//! clear_screen = true
//!
//! [player_x]
//! name = "Alice"
//! kind = "human"
//!
//! [player_o]
//! name = "Minimax"
//! kind = "bot"
//! ```

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who controls a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeatKind {
    /// Moves typed at the console.
    Human,
    /// Moves chosen by the minimax engine.
    Bot,
}

/// Configuration for one seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct SeatConfig {
    /// Display name.
    name: String,
    /// Human or bot.
    kind: SeatKind,
}

/// Configuration for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat playing X (moves first).
    #[serde(default = "default_player_x")]
    player_x: SeatConfig,

    /// Seat playing O.
    #[serde(default = "default_player_o")]
    player_o: SeatConfig,

    /// Clear the console before each turn.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_player_x() -> SeatConfig {
    SeatConfig::new("Player X".to_string(), SeatKind::Human)
}

fn default_player_o() -> SeatConfig {
    SeatConfig::new("Player O".to_string(), SeatKind::Bot)
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            x = %config.player_x.kind,
            o = %config.player_o.kind,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, x: Option<SeatKind>, o: Option<SeatKind>, no_clear: bool) -> Self {
        if let Some(kind) = x {
            self.player_x.kind = kind;
        }
        if let Some(kind) = o {
            self.player_o.kind = kind;
        }
        if no_clear {
            self.clear_screen = false;
        }
        self
    }

    /// Returns the seat playing `mark`.
    pub fn seat(&self, mark: Mark) -> &SeatConfig {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
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
