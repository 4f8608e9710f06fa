//! Core types: players, the board snapshot, seed-movement steps, configuration.
//!
//! Everything here is plain data. The rules that transform a `BoardState`
//! live in `rules`; nothing in this module decides whether a move is legal.

pub mod player;
pub mod board;
pub mod config;

pub use player::Player;
pub use board::{
    opposite_pit, BoardState, Step, Steps, PITS_PER_PLAYER, SEEDS_PER_PIT, SLOT_COUNT, TOTAL_SEEDS,
};
pub use config::{AppConfig, Opponent, PlaybackConfig};
