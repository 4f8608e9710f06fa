//! Player identification and board ownership.
//!
//! ## Player
//!
//! Bantumi is strictly two-player. Each player owns six playable pits and one
//! store on the shared 14-slot board:
//!
//! ```text
//!            12  11  10   9   8   7
//!      [13]                          [6]
//!             0   1   2   3   4   5
//! ```
//!
//! Player One owns pits `0..=5` and store `6`, Player Two owns pits `7..=12`
//! and store `13`.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::board::{PITS_PER_PLAYER, SLOT_COUNT};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first; the human side when playing against the computer.
    One,
    /// Moves second; the computer side when playing against the computer.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Get the 0-based player index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Slot index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::One => PITS_PER_PLAYER,
            Player::Two => SLOT_COUNT - 1,
        }
    }

    /// Slot indices of this player's six playable pits.
    #[must_use]
    pub fn pits(self) -> RangeInclusive<usize> {
        match self {
            Player::One => 0..=PITS_PER_PLAYER - 1,
            Player::Two => PITS_PER_PLAYER + 1..=SLOT_COUNT - 2,
        }
    }

    /// Check whether `pit` is one of this player's playable pits.
    ///
    /// Stores are never "own pits", not even the player's own store.
    #[must_use]
    pub fn owns_pit(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }

    /// The player owning a playable pit or store, if `slot` is on the board.
    #[must_use]
    pub fn owner_of(slot: usize) -> Option<Self> {
        match slot {
            s if s <= Player::One.store() => Some(Player::One),
            s if s <= Player::Two.store() => Some(Player::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_stores() {
        assert_eq!(Player::One.store(), 6);
        assert_eq!(Player::Two.store(), 13);
    }

    #[test]
    fn test_pits() {
        let one: Vec<_> = Player::One.pits().collect();
        let two: Vec<_> = Player::Two.pits().collect();

        assert_eq!(one, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(two, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_owns_pit_excludes_stores() {
        assert!(Player::One.owns_pit(0));
        assert!(Player::One.owns_pit(5));
        assert!(!Player::One.owns_pit(6));
        assert!(!Player::One.owns_pit(7));

        assert!(Player::Two.owns_pit(7));
        assert!(Player::Two.owns_pit(12));
        assert!(!Player::Two.owns_pit(13));
        assert!(!Player::Two.owns_pit(0));
    }

    #[test]
    fn test_owner_of() {
        assert_eq!(Player::owner_of(3), Some(Player::One));
        assert_eq!(Player::owner_of(6), Some(Player::One));
        assert_eq!(Player::owner_of(7), Some(Player::Two));
        assert_eq!(Player::owner_of(13), Some(Player::Two));
        assert_eq!(Player::owner_of(14), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::One), "Player One");
        assert_eq!(format!("{}", Player::Two), "Player Two");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::Two).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::Two);
    }
}
