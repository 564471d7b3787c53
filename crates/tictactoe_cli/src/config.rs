//! Game configuration loaded from TOML and command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tictactoe::{GameMode, Mark};
use tracing::{debug, info, instrument};

/// Driver settings.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, Getters, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Game mode; `None` asks the player at startup.
    mode: Option<GameMode>,

    /// Glyph drawn for player one (X).
    player_one_glyph: char,

    /// Glyph drawn for player two or the computer (O).
    player_two_glyph: char,

    /// Seed for the computer's tie-breaks.
    seed: Option<u64>,

    /// Clear the terminal before each board and pause after messages.
    clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: None,
            player_one_glyph: Mark::X.glyph(),
            player_two_glyph: Mark::O.glyph(),
            seed: None,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.player_one_glyph == config.player_two_glyph {
            return Err(ConfigError::new(format!(
                "Both players use the glyph '{}'",
                config.player_one_glyph
            )));
        }

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of file values.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self = self.with_mode(mode.into());
        }
        if let Some(seed) = cli.seed {
            self = self.with_seed(seed);
        }
        if cli.no_clear {
            self = self.with_clear_screen(false);
        }
        self
    }

    /// Sets the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the computer's seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables screen clearing and pauses.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Glyph drawn for `mark`.
    pub fn glyph(&self, mark: Mark) -> char {
        match mark {
            Mark::X => *self.player_one_glyph(),
            Mark::O => *self.player_two_glyph(),
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
