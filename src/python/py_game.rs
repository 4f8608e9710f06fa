//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ai::select_move;
use crate::core::{BoardState, Player};
use crate::error::RuleError;
use crate::rules::{apply_move, GameResult};

fn to_py_err(err: RuleError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn player_number(player: Player) -> u8 {
    player.index() as u8 + 1
}

/// Python wrapper around a `BoardState`.
///
/// Players are reported as 1 and 2; pits use the 14-slot layout
/// (0-5 Player One, 6 store, 7-12 Player Two, 13 store).
#[pyclass(name = "BantumiGame")]
#[derive(Clone, Debug)]
pub struct PyBantumiGame {
    state: BoardState,
}

#[pymethods]
impl PyBantumiGame {
    /// Create a game in the opening position.
    #[new]
    fn new() -> Self {
        Self {
            state: BoardState::initial(),
        }
    }

    /// Non-empty pits of the player to move.
    fn legal_moves(&self) -> Vec<usize> {
        self.state.legal_moves()
    }

    /// Play a pit. Returns the steps as `(pit, delta)` tuples.
    ///
    /// Raises `ValueError` for an invalid move.
    fn apply_move(&mut self, pit: usize) -> PyResult<Vec<(usize, i32)>> {
        let outcome = apply_move(&self.state, pit).map_err(to_py_err)?;
        self.state = outcome.state;
        Ok(outcome
            .steps
            .iter()
            .map(|step| (step.target, step.delta))
            .collect())
    }

    /// Heuristic pick for the player to move.
    ///
    /// Raises `ValueError` if there is nothing to play.
    fn select_move(&self) -> PyResult<usize> {
        select_move(&self.state).map_err(to_py_err)
    }

    /// The 14 slot counts.
    #[getter]
    fn board(&self) -> Vec<u8> {
        self.state.slots.to_vec()
    }

    /// Player to move (1 or 2).
    #[getter]
    fn current_player(&self) -> u8 {
        player_number(self.state.current_player)
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.state.game_over
    }

    /// Winner (1 or 2), 0 for a tie, `None` while the game runs.
    #[getter]
    fn winner(&self) -> Option<u8> {
        self.state.result().map(|result| match result {
            GameResult::Winner(player) => player_number(player),
            GameResult::Draw => 0,
        })
    }

    /// Copy the game for lookahead.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let status = if self.state.game_over { "over" } else { "ongoing" };
        format!(
            "BantumiGame(to_move=P{}, stores={}-{}, status={})",
            self.current_player(),
            self.state.store(Player::One),
            self.state.store(Player::Two),
            status
        )
    }
}
