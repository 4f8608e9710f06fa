//! Board snapshot and seed-movement steps.
//!
//! ## BoardState
//!
//! An immutable snapshot of one game: 14 slot counts, the player to move, the
//! terminal flag and the last accepted pit. It is `Copy`, so every engine call
//! hands back a fresh value and nothing is mutated in place.
//!
//! ## Step
//!
//! One atomic seed movement, in the order the presentation layer must replay
//! it. Sowing produces `+1` steps; a capture produces one positive step into
//! the store followed by negative steps emptying the two source pits.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use crate::rules::GameResult;

/// Total slots on the board: 12 playable pits and 2 stores.
pub const SLOT_COUNT: usize = 14;

/// Playable pits owned by each player.
pub const PITS_PER_PLAYER: usize = 6;

/// Seeds placed in every playable pit at the start of a game.
pub const SEEDS_PER_PIT: u8 = 4;

/// Seeds in play for the whole game.
pub const TOTAL_SEEDS: u32 = SEEDS_PER_PIT as u32 * (2 * PITS_PER_PLAYER) as u32;

/// The pit across the board from a playable pit.
///
/// Returns `None` for stores and out-of-range indices.
///
/// ```
/// use bantumi::core::opposite_pit;
///
/// assert_eq!(opposite_pit(0), Some(12));
/// assert_eq!(opposite_pit(8), Some(4));
/// assert_eq!(opposite_pit(6), None);
/// ```
#[must_use]
pub fn opposite_pit(pit: usize) -> Option<usize> {
    if Player::One.owns_pit(pit) || Player::Two.owns_pit(pit) {
        Some(SLOT_COUNT - 2 - pit)
    } else {
        None
    }
}

/// A single seed movement: add `delta` seeds to slot `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Slot receiving (or losing) seeds.
    pub target: usize,
    /// Signed seed change.
    pub delta: i32,
}

impl Step {
    /// Create a new step.
    #[must_use]
    pub const fn new(target: usize, delta: i32) -> Self {
        Self { target, delta }
    }

    /// A single sown seed.
    #[must_use]
    pub const fn sow(target: usize) -> Self {
        Self { target, delta: 1 }
    }
}

/// Ordered step list for one move.
///
/// Inline capacity covers a full lap of sowing plus a capture without
/// touching the heap.
pub type Steps = SmallVec<[Step; 16]>;

/// Immutable snapshot of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Seed counts: pits `0..=5`, store `6`, pits `7..=12`, store `13`.
    pub slots: [u8; SLOT_COUNT],

    /// Player whose turn it is.
    pub current_player: Player,

    /// Set once a row has emptied and the sweep has run.
    pub game_over: bool,

    /// Pit of the most recently accepted move.
    pub last_move: Option<usize>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

impl BoardState {
    /// Opening position: four seeds in every pit, empty stores, Player One to move.
    #[must_use]
    pub fn initial() -> Self {
        let mut slots = [SEEDS_PER_PIT; SLOT_COUNT];
        slots[Player::One.store()] = 0;
        slots[Player::Two.store()] = 0;

        Self {
            slots,
            current_player: Player::One,
            game_over: false,
            last_move: None,
        }
    }

    /// Build a mid-game position from raw slot counts.
    ///
    /// The total need not be [`TOTAL_SEEDS`]; useful for tests and puzzles.
    /// It must fit in a `u8`, though: moves never change the total, so no
    /// slot can then overflow while sowing or capturing. Debug builds panic
    /// on a larger total.
    #[must_use]
    pub fn from_slots(slots: [u8; SLOT_COUNT], current_player: Player) -> Self {
        debug_assert!(
            slots.iter().map(|&s| u32::from(s)).sum::<u32>() <= u32::from(u8::MAX),
            "board total exceeds {} seeds",
            u8::MAX
        );
        Self {
            slots,
            current_player,
            game_over: false,
            last_move: None,
        }
    }

    /// Seeds in a slot.
    #[must_use]
    pub fn seeds(&self, slot: usize) -> u8 {
        self.slots[slot]
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u8 {
        self.slots[player.store()]
    }

    /// Sum of all slots. Constant at [`TOTAL_SEEDS`] for every reachable state.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.slots.iter().map(|&s| u32::from(s)).sum()
    }

    /// Seeds still on a player's side of the board (stores excluded).
    #[must_use]
    pub fn row_seeds(&self, player: Player) -> u32 {
        player.pits().map(|pit| u32::from(self.slots[pit])).sum()
    }

    /// Check whether all six of a player's pits are empty.
    #[must_use]
    pub fn is_row_empty(&self, player: Player) -> bool {
        player.pits().all(|pit| self.slots[pit] == 0)
    }

    /// Non-empty pits of the player to move, in index order.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.game_over {
            return Vec::new();
        }

        self.current_player
            .pits()
            .filter(|&pit| self.slots[pit] > 0)
            .collect()
    }

    /// Final result, or `None` while the game is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }

        let one = self.store(Player::One);
        let two = self.store(Player::Two);

        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// Apply one step in place.
    ///
    /// Only presentation copies replay steps; engine states are never
    /// mutated after they are returned.
    pub fn apply_step(&mut self, step: Step) {
        let slot = &mut self.slots[step.target];
        *slot = (i32::from(*slot) + step.delta).clamp(0, i32::from(u8::MAX)) as u8;
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "     ")?;
        for pit in Player::Two.pits().rev() {
            write!(f, "{:>3}", self.slots[pit])?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:>3}{:>23}",
            self.store(Player::Two),
            self.store(Player::One)
        )?;

        write!(f, "     ")?;
        for pit in Player::One.pits() {
            write!(f, "{:>3}", self.slots[pit])?;
        }
        Ok(())
    }
}
