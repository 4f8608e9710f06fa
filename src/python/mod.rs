//! Python bindings for the Bantumi engine.
//!
//! # Quick Start
//!
//! ```python
//! import bantumi
//!
//! game = bantumi.BantumiGame()
//! steps = game.apply_move(3)          # [(4, 1), (5, 1), (6, 1), (7, 1)]
//! pit = game.select_move()            # heuristic pick for the side to move
//! game.apply_move(pit)
//! print(game.board, game.current_player, game.game_over)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// bantumi: rules engine and greedy opponent for the Bantumi board game.
#[pymodule]
fn bantumi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBantumiGame>()?;
    Ok(())
}
