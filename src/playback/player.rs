//! Cursor-based replay of a move's steps.

use std::time::Duration;

use tracing::trace;

use crate::core::{BoardState, PlaybackConfig, Step, Steps};
use crate::rules::MoveOutcome;

use super::PlaybackStatus;

/// Replays one move's steps onto a presentation copy of the board.
///
/// The owner calls [`tick`](Self::tick) on its own cadence. Each tick applies
/// exactly one step and moves the highlighted pit to that step's target. The
/// tick after the last step reports `Finished`; if the move ended the game,
/// the presentation board is replaced by the swept final state at that point.
///
/// Pausing freezes the cursor; resuming continues from the same step.
#[derive(Clone, Debug)]
pub struct StepPlayer {
    steps: Steps,
    cursor: usize,
    board: BoardState,
    final_state: BoardState,
    highlighted: Option<usize>,
    in_hand: u32,
    paused: bool,
    finished: bool,
}

impl StepPlayer {
    /// Start replaying `outcome`, which resulted from a move on `before`.
    ///
    /// The seeds in the source pit are picked up immediately, so the
    /// presentation board shows it empty before the first step.
    #[must_use]
    pub fn new(before: &BoardState, outcome: &MoveOutcome) -> Self {
        let pit = outcome.pit;
        let mut board = *before;
        let in_hand = u32::from(board.slots[pit]);
        board.slots[pit] = 0;

        Self {
            steps: outcome.steps.clone(),
            cursor: 0,
            board,
            final_state: outcome.state,
            highlighted: Some(pit),
            in_hand,
            paused: false,
            finished: false,
        }
    }

    /// Advance by one step.
    pub fn tick(&mut self) -> PlaybackStatus {
        if self.finished {
            return self.finished_status();
        }
        if self.paused {
            return PlaybackStatus::Paused;
        }

        match self.steps.get(self.cursor).copied() {
            Some(step) => {
                self.apply(step);
                let status = PlaybackStatus::Playing {
                    cursor: self.cursor,
                    pit: step.target,
                };
                self.cursor += 1;
                status
            }
            None => {
                self.finish();
                self.finished_status()
            }
        }
    }

    /// Apply every remaining step and finish, ignoring pause.
    pub fn skip_to_end(&mut self) -> PlaybackStatus {
        while let Some(step) = self.steps.get(self.cursor).copied() {
            self.apply(step);
            self.cursor += 1;
        }
        self.finish();
        self.finished_status()
    }

    /// Freeze the cursor.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue from the frozen cursor.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Check if playback is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Check if every step has been applied and completion reported.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of steps applied so far.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Steps not yet applied.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.cursor
    }

    /// All steps of the move.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The presentation board as of the current cursor.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The engine state the move produced.
    #[must_use]
    pub fn final_state(&self) -> &BoardState {
        &self.final_state
    }

    /// Pit the animation cursor sits on, `None` once finished.
    #[must_use]
    pub fn highlighted_pit(&self) -> Option<usize> {
        self.highlighted
    }

    /// Seeds picked up but not yet sown.
    #[must_use]
    pub fn seeds_in_hand(&self) -> u32 {
        self.in_hand
    }

    /// Extra wait after completion before the end screen.
    #[must_use]
    pub fn finish_delay(&self, config: &PlaybackConfig) -> Duration {
        if self.final_state.game_over {
            config.game_over_delay()
        } else {
            Duration::ZERO
        }
    }

    fn apply(&mut self, step: Step) {
        trace!(cursor = self.cursor, target = step.target, delta = step.delta, "step");
        self.board.apply_step(step);
        self.highlighted = Some(step.target);
        if step.delta == 1 {
            self.in_hand = self.in_hand.saturating_sub(1);
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.highlighted = None;
        // Turn and terminal flags only change once the move is fully shown.
        self.board = self.final_state;
    }

    fn finished_status(&self) -> PlaybackStatus {
        PlaybackStatus::Finished {
            game_over: self.final_state.game_over,
        }
    }
}
