//! Step playback for the presentation layer.
//!
//! The engine hands back a complete, ordered list of steps per move and never
//! waits on a clock. A [`StepPlayer`] walks that list one step per tick on a
//! presentation copy of the board, so the owner decides the cadence and can
//! pause without losing its place.
//!
//! ## Example
//!
//! ```
//! use bantumi::playback::{PlaybackStatus, StepPlayer};
//! use bantumi::rules::{apply_move, initial_state};
//!
//! let before = initial_state();
//! let outcome = apply_move(&before, 2).unwrap();
//! let mut player = StepPlayer::new(&before, &outcome);
//!
//! assert_eq!(player.tick(), PlaybackStatus::Playing { cursor: 0, pit: 3 });
//! player.pause();
//! assert_eq!(player.tick(), PlaybackStatus::Paused);
//! player.resume();
//! assert_eq!(player.tick(), PlaybackStatus::Playing { cursor: 1, pit: 4 });
//! ```

mod player;

pub use player::StepPlayer;

use serde::{Deserialize, Serialize};

/// Status returned by each playback tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Step `cursor` was applied; the highlight moved to `pit`.
    Playing { cursor: usize, pit: usize },

    /// Paused; nothing was applied.
    Paused,

    /// All steps are shown. `game_over` says whether to move to the end screen.
    Finished { game_over: bool },
}
