//! Game configuration types.
//!
//! The rules themselves are fixed; configuration only covers who plays
//! Player Two and how fast the presentation layer replays steps:
//! - `Opponent`: hot-seat human or the built-in heuristic
//! - `PlaybackConfig`: step cadence and the pauses around computer turns
//! - `AppConfig`: both of the above, loadable from TOML

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Who controls Player Two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Two humans share the device.
    #[default]
    Human,
    /// Player Two is driven by the greedy heuristic.
    Computer,
}

/// Cadence for replaying a move's steps.
///
/// The engine never sleeps; these values are read by whoever owns the timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between two consecutive steps.
    pub step_interval_ms: u64,

    /// Extra delay after the last step before showing the end screen.
    pub game_over_delay_ms: u64,

    /// Pause before the computer starts "thinking".
    pub computer_think_delay_ms: u64,

    /// Pause between picking the computer's pit and sowing it.
    pub computer_move_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 300,
            game_over_delay_ms: 1000,
            computer_think_delay_ms: 1000,
            computer_move_delay_ms: 500,
        }
    }
}

impl PlaybackConfig {
    /// A config with every delay set to zero (tests, headless runs).
    #[must_use]
    pub fn instant() -> Self {
        Self {
            step_interval_ms: 0,
            game_over_delay_ms: 0,
            computer_think_delay_ms: 0,
            computer_move_delay_ms: 0,
        }
    }

    /// Set the step interval.
    #[must_use]
    pub fn with_step_interval(mut self, ms: u64) -> Self {
        self.step_interval_ms = ms;
        self
    }

    /// Set the game-over delay.
    #[must_use]
    pub fn with_game_over_delay(mut self, ms: u64) -> Self {
        self.game_over_delay_ms = ms;
        self
    }

    /// Set both computer-turn delays.
    #[must_use]
    pub fn with_computer_delays(mut self, think_ms: u64, move_ms: u64) -> Self {
        self.computer_think_delay_ms = think_ms;
        self.computer_move_delay_ms = move_ms;
        self
    }

    /// Step interval as a `Duration`.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Game-over delay as a `Duration`.
    #[must_use]
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    /// Total pause before a computer move starts playing back.
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_think_delay_ms + self.computer_move_delay_ms)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Who plays Player Two.
    pub opponent: Opponent,

    /// Step playback cadence.
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playback.step_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "playback.step_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}
