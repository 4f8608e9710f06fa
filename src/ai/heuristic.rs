//! Greedy move selection for the computer player.
//!
//! No search or lookahead: the first matching tier wins.
//! 1. A pit whose last seed lands in the mover's own store (extra turn)
//! 2. A pit whose last seed lands in an empty own pit across from seeds (capture)
//! 3. The fullest pit
//!
//! Tiers 1 and 2 prefer the lowest index; tier 3 breaks ties by lowest index.

use tracing::debug;

use crate::core::{opposite_pit, BoardState, Player};
use crate::error::RuleError;
use crate::rules::landing_pit;

use super::MovePolicy;

/// Why the heuristic picked a pit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Last seed lands in the mover's store.
    ExtraTurn,
    /// Last seed lands in an empty own pit across from a non-empty pit.
    Capture,
    /// Fullest non-empty pit.
    Fallback,
}

/// The three-tier greedy policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyHeuristic;

impl GreedyHeuristic {
    /// Create the policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Pick a pit for the player to move, along with the tier that chose it.
    pub fn select_with_tier(&self, state: &BoardState) -> Result<(usize, Tier), RuleError> {
        let player = state.current_player;
        let candidates = state.legal_moves();
        if candidates.is_empty() {
            return Err(RuleError::NoLegalMove { player });
        }

        let landing = |pit: usize| landing_pit(player, pit, state.slots[pit]);

        let choice = if let Some(&pit) = candidates
            .iter()
            .find(|&&pit| landing(pit) == player.store())
        {
            (pit, Tier::ExtraTurn)
        } else if let Some(&pit) = candidates
            .iter()
            .find(|&&pit| is_capture_landing(state, player, landing(pit)))
        {
            (pit, Tier::Capture)
        } else {
            // `max_by_key` keeps the last maximum; reversing keeps the lowest index.
            let pit = candidates
                .iter()
                .rev()
                .copied()
                .max_by_key(|&pit| state.slots[pit])
                .ok_or(RuleError::NoLegalMove { player })?;
            (pit, Tier::Fallback)
        };

        debug!(player = %player, pit = choice.0, tier = ?choice.1, "heuristic selected pit");
        Ok(choice)
    }
}

impl MovePolicy for GreedyHeuristic {
    fn select(&self, state: &BoardState) -> Result<usize, RuleError> {
        self.select_with_tier(state).map(|(pit, _)| pit)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

/// Pick a pit for the player to move using the greedy heuristic.
///
/// Returns `NoLegalMove` on a finished game or an empty row.
///
/// ```
/// use bantumi::ai::select_move;
/// use bantumi::rules::{initial_state, make_move};
///
/// let state = make_move(&initial_state(), 3).unwrap();
/// // Player Two's pit 9 holds four seeds: exactly enough to reach store 13.
/// assert_eq!(select_move(&state), Ok(9));
/// ```
pub fn select_move(state: &BoardState) -> Result<usize, RuleError> {
    GreedyHeuristic.select(state)
}

/// An own pit that is empty right now, with seeds across from it.
fn is_capture_landing(state: &BoardState, player: Player, landing: usize) -> bool {
    player.owns_pit(landing)
        && state.slots[landing] == 0
        && opposite_pit(landing).is_some_and(|opposite| state.slots[opposite] > 0)
}
