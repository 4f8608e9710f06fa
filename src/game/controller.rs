//! Single-game controller.

use tracing::{debug, warn};

use crate::ai::{GreedyHeuristic, MovePolicy};
use crate::core::{BoardState, Opponent, Player};
use crate::error::ControllerError;
use crate::playback::{PlaybackStatus, StepPlayer};
use crate::rules::{apply_move, initial_state, GameResult};

/// One game in progress.
///
/// Holds the current engine state and at most one in-flight playback. No
/// move (human or computer) is accepted until the previous move's steps have
/// been fully played back.
pub struct Game {
    opponent: Opponent,
    policy: Box<dyn MovePolicy>,
    state: BoardState,
    playback: Option<StepPlayer>,
    paused: bool,
    moves_played: u32,
}

impl Game {
    /// Start a new game with the greedy heuristic as the computer player.
    #[must_use]
    pub fn new(opponent: Opponent) -> Self {
        Self::with_policy(opponent, Box::new(GreedyHeuristic::new()))
    }

    /// Start a new game with a custom computer policy.
    #[must_use]
    pub fn with_policy(opponent: Opponent, policy: Box<dyn MovePolicy>) -> Self {
        Self {
            opponent,
            policy,
            state: initial_state(),
            playback: None,
            paused: false,
            moves_played: 0,
        }
    }

    /// Who plays Player Two.
    #[must_use]
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Engine state, already including any move still being played back.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Board to draw: the playback copy while a move is in flight.
    #[must_use]
    pub fn displayed_board(&self) -> &BoardState {
        self.playback
            .as_ref()
            .map_or(&self.state, |playback| playback.board())
    }

    /// Pit to highlight, if a move is being played back.
    #[must_use]
    pub fn highlighted_pit(&self) -> Option<usize> {
        self.playback.as_ref().and_then(StepPlayer::highlighted_pit)
    }

    /// The in-flight playback, if any.
    #[must_use]
    pub fn playback(&self) -> Option<&StepPlayer> {
        self.playback.as_ref()
    }

    /// Check if a move is still being played back.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    /// Check if the game is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Check if the heuristic should move next.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.opponent == Opponent::Computer
            && self.state.current_player == Player::Two
            && !self.state.game_over
    }

    /// Check if the game has ended. Stays false until the last move has been
    /// fully played back.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over && self.playback.is_none()
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.is_over() {
            self.state.result()
        } else {
            None
        }
    }

    /// A human picked `pit`.
    pub fn select_pit(&mut self, pit: usize) -> Result<(), ControllerError> {
        self.ensure_idle()?;
        if self.is_computer_turn() {
            return Err(ControllerError::NotHumanTurn);
        }
        self.start_move(pit)
    }

    /// Let the computer move. Returns the pit it played.
    pub fn play_computer_turn(&mut self) -> Result<usize, ControllerError> {
        self.ensure_idle()?;
        if !self.is_computer_turn() {
            return Err(ControllerError::NotComputerTurn);
        }

        let pit = self.policy.select(&self.state)?;
        debug!(policy = self.policy.name(), pit, "computer move");
        self.start_move(pit)?;
        Ok(pit)
    }

    /// Advance the in-flight playback by one step.
    ///
    /// Returns `None` when nothing is being played back.
    pub fn tick(&mut self) -> Option<PlaybackStatus> {
        let status = self.playback.as_mut()?.tick();
        if matches!(status, PlaybackStatus::Finished { .. }) {
            self.playback = None;
        }
        Some(status)
    }

    /// Play back the in-flight move to the end at once.
    pub fn finish_playback(&mut self) -> Option<PlaybackStatus> {
        let status = self.playback.take()?.skip_to_end();
        Some(status)
    }

    /// Pause input and playback.
    pub fn pause(&mut self) {
        self.paused = true;
        if let Some(playback) = self.playback.as_mut() {
            playback.pause();
        }
    }

    /// Resume input and playback where they stopped.
    pub fn resume(&mut self) {
        self.paused = false;
        if let Some(playback) = self.playback.as_mut() {
            playback.resume();
        }
    }

    /// Throw away the current game and start over.
    pub fn restart(&mut self) {
        self.state = initial_state();
        self.playback = None;
        self.paused = false;
        self.moves_played = 0;
    }

    fn ensure_idle(&self) -> Result<(), ControllerError> {
        if self.paused {
            return Err(ControllerError::Paused);
        }
        if self.playback.is_some() {
            return Err(ControllerError::MoveInFlight);
        }
        Ok(())
    }

    fn start_move(&mut self, pit: usize) -> Result<(), ControllerError> {
        let outcome = apply_move(&self.state, pit).map_err(|e| {
            warn!(pit, error = %e, "move rejected");
            e
        })?;

        self.playback = Some(StepPlayer::new(&self.state, &outcome));
        self.state = outcome.state;
        self.moves_played += 1;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Opponent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidMoveReason, RuleError};

    fn drain(game: &mut Game) -> PlaybackStatus {
        loop {
            match game.tick() {
                Some(PlaybackStatus::Playing { .. }) => continue,
                Some(status) => return status,
                None => panic!("nothing in flight"),
            }
        }
    }

    #[test]
    fn test_new_game() {
        let mut game = Game::new(Opponent::Computer);

        assert_eq!(*game.state(), initial_state());
        assert!(!game.is_animating());
        assert!(!game.is_over());
        assert!(!game.is_computer_turn());
        assert_eq!(game.tick(), None);
    }

    #[test]
    fn test_move_in_flight_blocks_input() {
        let mut game = Game::new(Opponent::Human);

        game.select_pit(0).unwrap();
        assert!(game.is_animating());
        assert_eq!(game.select_pit(8), Err(ControllerError::MoveInFlight));

        assert_eq!(drain(&mut game), PlaybackStatus::Finished { game_over: false });
        assert!(!game.is_animating());
        assert!(game.select_pit(8).is_ok());
    }

    #[test]
    fn test_displayed_board_follows_playback() {
        let mut game = Game::new(Opponent::Human);
        game.select_pit(2).unwrap();

        assert_eq!(game.displayed_board().seeds(3), 4);
        game.tick();
        assert_eq!(game.displayed_board().seeds(3), 5);
        assert_eq!(game.highlighted_pit(), Some(3));
        assert_eq!(game.displayed_board().seeds(6), 0);
        assert_eq!(game.state().seeds(6), 1);
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut game = Game::new(Opponent::Human);
        let before = *game.state();

        assert_eq!(
            game.select_pit(9),
            Err(ControllerError::Rule(RuleError::invalid(
                9,
                InvalidMoveReason::NotOwnPit
            )))
        );
        assert_eq!(*game.state(), before);
        assert!(!game.is_animating());
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn test_computer_turn() {
        let mut game = Game::new(Opponent::Computer);

        assert_eq!(game.play_computer_turn(), Err(ControllerError::NotComputerTurn));

        game.select_pit(0).unwrap();
        game.finish_playback();
        assert!(game.is_computer_turn());
        assert_eq!(game.select_pit(8), Err(ControllerError::NotHumanTurn));

        let pit = game.play_computer_turn().unwrap();
        assert!(Player::Two.owns_pit(pit));
        assert_eq!(game.moves_played(), 2);
    }

    #[test]
    fn test_pause_blocks_and_freezes() {
        let mut game = Game::new(Opponent::Human);
        game.select_pit(2).unwrap();
        game.tick();

        game.pause();
        assert_eq!(game.tick(), Some(PlaybackStatus::Paused));
        assert_eq!(game.playback().map(StepPlayer::cursor), Some(1));

        game.resume();
        assert_eq!(game.tick(), Some(PlaybackStatus::Playing { cursor: 1, pit: 4 }));
    }

    #[test]
    fn test_paused_rejects_input() {
        let mut game = Game::new(Opponent::Human);
        game.pause();
        assert_eq!(game.select_pit(0), Err(ControllerError::Paused));
        game.resume();
        assert!(game.select_pit(0).is_ok());
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new(Opponent::Computer);
        game.select_pit(3).unwrap();
        game.pause();

        game.restart();

        assert_eq!(*game.state(), initial_state());
        assert!(!game.is_animating());
        assert!(!game.is_paused());
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn test_computer_game_runs_to_end() {
        let mut game = Game::new(Opponent::Computer);
        let mut guard = 0;

        while !game.is_over() && guard < 500 {
            if game.is_computer_turn() {
                game.play_computer_turn().unwrap();
            } else {
                let pit = game.state().legal_moves()[0];
                game.select_pit(pit).unwrap();
            }
            game.finish_playback();
            guard += 1;
        }

        assert!(game.is_over());
        assert!(game.result().is_some());
        assert_eq!(game.state().total_seeds(), 48);
    }
}
