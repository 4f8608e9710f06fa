//! # bantumi
//!
//! Deterministic rules engine for Bantumi, the two-player Mancala variant.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every engine call takes a `BoardState` and returns a
//!    new one. Nothing is mutated in place and nothing touches I/O.
//!
//! 2. **Replayable Moves**: A move also returns the ordered list of seed
//!    movements (`Step`s) so a presentation layer can animate it exactly.
//!
//! 3. **Explicit Rejection**: Invalid moves and empty selections come back as
//!    `RuleError`s instead of silently returning the input state.
//!
//! ## Board Layout
//!
//! One 14-slot sequence: pits `0..=5` and store `6` for Player One, pits
//! `7..=12` and store `13` for Player Two. Seeds travel by increasing index
//! and skip the opponent's store.
//!
//! ## Modules
//!
//! - `core`: Players, board snapshot, steps, configuration
//! - `rules`: Move engine and end-of-game sweep
//! - `ai`: Greedy move selection for the computer player
//! - `playback`: Tick-driven step replay with pause/resume
//! - `game`: Single-game controller (one move in flight at a time)
//!
//! ## Example
//!
//! ```
//! use bantumi::{apply_move, initial_state, Player};
//!
//! let outcome = apply_move(&initial_state(), 2).unwrap();
//! assert_eq!(outcome.state.slots, [4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
//! // The last seed lands in the store, so Player One moves again.
//! assert_eq!(outcome.state.current_player, Player::One);
//! assert_eq!(outcome.steps.len(), 4);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod ai;
pub mod playback;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    opposite_pit, AppConfig, BoardState, Opponent, PlaybackConfig, Player, Step, Steps,
    PITS_PER_PLAYER, SLOT_COUNT, TOTAL_SEEDS,
};

pub use crate::error::{ConfigError, ControllerError, InvalidMoveReason, RuleError};

pub use crate::rules::{
    apply_move, check_game_over, initial_state, landing_pit, make_move, GameResult, MoveOutcome,
};

pub use crate::ai::{select_move, GreedyHeuristic, MovePolicy, Tier};

pub use crate::playback::{PlaybackStatus, StepPlayer};

pub use crate::game::Game;
