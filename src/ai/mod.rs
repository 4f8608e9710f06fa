//! Move selection for computer-controlled players.
//!
//! Policies are trait-based so the controller does not care how a pit is
//! chosen. The only shipped policy is [`GreedyHeuristic`].

mod heuristic;

pub use heuristic::{select_move, GreedyHeuristic, Tier};

use crate::core::BoardState;
use crate::error::RuleError;

/// Chooses a pit for the player to move.
pub trait MovePolicy: Send + Sync {
    /// Pick a legal pit from `state`.
    ///
    /// Must be deterministic: the same state always yields the same pit.
    /// Returns `NoLegalMove` if the player to move has nothing to play.
    fn select(&self, state: &BoardState) -> Result<usize, RuleError>;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}
