use std::path::PathBuf;

use crate::core::Player;

/// Why a pit cannot be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The game already ended.
    GameOver,
    /// The index is not a slot on the board.
    PitOutOfRange,
    /// The slot is a store or belongs to the other player.
    NotOwnPit,
    /// The pit holds no seeds.
    EmptyPit,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidMoveReason::GameOver => "game is already over",
            InvalidMoveReason::PitOutOfRange => "pit is off the board",
            InvalidMoveReason::NotOwnPit => "pit does not belong to the player to move",
            InvalidMoveReason::EmptyPit => "pit is empty",
        };
        f.write_str(text)
    }
}

/// Errors raised by the rules engine and move selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("invalid move at pit {pit}: {reason}")]
    InvalidMove {
        pit: usize,
        reason: InvalidMoveReason,
    },

    #[error("{player} has no legal move")]
    NoLegalMove { player: Player },
}

impl RuleError {
    /// Shorthand for an `InvalidMove`.
    #[must_use]
    pub fn invalid(pit: usize, reason: InvalidMoveReason) -> Self {
        RuleError::InvalidMove { pit, reason }
    }
}

/// Errors raised by the single-game controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("a move is still being played back")]
    MoveInFlight,

    #[error("the game is paused")]
    Paused,

    #[error("it is not a human player's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
