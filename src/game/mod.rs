//! Single-game controller used by presentation layers.
//!
//! [`Game`] wires the rules, the heuristic and step playback together and
//! enforces the one-move-in-flight rule: a pit selection or computer turn is
//! refused while the previous move is still being played back, and while the
//! game is paused.

mod controller;

pub use controller::Game;
