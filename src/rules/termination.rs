//! End-of-game detection and the final sweep.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{BoardState, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player finished with more seeds in their store.
    Winner(Player),
    /// Both stores hold the same count.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// End the game if either row is empty.
///
/// Every seed left on a row goes into that row owner's store and the pits are
/// zeroed, then `game_over` is set. A state where neither row is empty comes
/// back as an unchanged copy. Running it twice is the same as running it once:
/// after the sweep both rows are empty, so the second pass moves nothing.
#[must_use]
pub fn check_game_over(state: &BoardState) -> BoardState {
    let mut next = *state;

    if !(next.is_row_empty(Player::One) || next.is_row_empty(Player::Two)) {
        return next;
    }

    for player in Player::ALL {
        let store = player.store();
        for pit in player.pits() {
            next.slots[store] += next.slots[pit];
            next.slots[pit] = 0;
        }
    }

    next.game_over = true;
    if !state.game_over {
        info!(
            store_one = next.store(Player::One),
            store_two = next.store(Player::Two),
            result = ?next.result(),
            "game over"
        );
    }
    next
}
