//! Bantumi rules: sowing, capture, extra turns and the end-of-game sweep.
//!
//! The public surface is a handful of pure functions:
//! - `initial_state`: opening position
//! - `apply_move`: new state plus replayable steps
//! - `make_move`: new state only
//! - `check_game_over`: detect an empty row and sweep
//!
//! `landing_pit` exposes the sowing traversal so move selection predicts
//! exactly what `apply_move` will do.

pub mod engine;
pub mod termination;

pub use engine::{
    apply_move, initial_state, landing_pit, make_move, next_slot, validate_move, MoveOutcome,
};
pub use termination::{check_game_over, GameResult};
