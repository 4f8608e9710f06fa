//! Move engine: validation, sowing, capture and turn hand-off.
//!
//! Every function here is pure. A move takes a `BoardState` by value and
//! returns a new one together with the ordered steps that describe how the
//! seeds travelled.

use tracing::debug;

use crate::core::{opposite_pit, BoardState, Player, Step, Steps, SLOT_COUNT};
use crate::error::{InvalidMoveReason, RuleError};

use super::termination::check_game_over;

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Pit the seeds were picked up from.
    pub pit: usize,

    /// State after sowing, capture, turn hand-off and the termination check.
    pub state: BoardState,

    /// Sowing and capture steps in replay order. Never includes the
    /// end-of-game sweep.
    pub steps: Steps,

    /// Slot that received the last sown seed.
    pub landing_pit: usize,

    /// Seeds moved into the mover's store by a capture (0 if none).
    pub captured: u8,

    /// The mover keeps the turn.
    pub extra_turn: bool,
}

/// Opening position of a new game.
#[must_use]
pub fn initial_state() -> BoardState {
    BoardState::initial()
}

/// Check that `pit` may be played from `state`.
pub fn validate_move(state: &BoardState, pit: usize) -> Result<(), RuleError> {
    if state.game_over {
        return Err(RuleError::invalid(pit, InvalidMoveReason::GameOver));
    }
    if pit >= SLOT_COUNT {
        return Err(RuleError::invalid(pit, InvalidMoveReason::PitOutOfRange));
    }
    if !state.current_player.owns_pit(pit) {
        return Err(RuleError::invalid(pit, InvalidMoveReason::NotOwnPit));
    }
    if state.slots[pit] == 0 {
        return Err(RuleError::invalid(pit, InvalidMoveReason::EmptyPit));
    }
    Ok(())
}

/// Next slot a seed sown by `mover` reaches after `slot`.
///
/// Travel is by increasing index modulo 14; the opponent's store is skipped.
#[must_use]
pub fn next_slot(mover: Player, slot: usize) -> usize {
    let next = (slot + 1) % SLOT_COUNT;
    if next == mover.opponent().store() {
        (next + 1) % SLOT_COUNT
    } else {
        next
    }
}

/// Slot the last of `seeds` seeds lands in when `mover` sows from `pit`.
///
/// ```
/// use bantumi::core::Player;
/// use bantumi::rules::landing_pit;
///
/// assert_eq!(landing_pit(Player::One, 2, 4), 6);
/// // Player Two skips Player One's store on the way round.
/// assert_eq!(landing_pit(Player::Two, 12, 8), 7);
/// ```
#[must_use]
pub fn landing_pit(mover: Player, pit: usize, seeds: u8) -> usize {
    (0..seeds).fold(pit, |slot, _| next_slot(mover, slot))
}

/// Play `pit` for the player to move.
///
/// Returns the new state and the steps to animate, or `InvalidMove` when the
/// game is over, the pit is not the mover's, or it is empty. The input state
/// is never touched.
pub fn apply_move(state: &BoardState, pit: usize) -> Result<MoveOutcome, RuleError> {
    validate_move(state, pit)?;

    let mover = state.current_player;
    let mut next = *state;
    next.last_move = Some(pit);

    let mut steps = Steps::new();
    let mut remaining = next.slots[pit];
    next.slots[pit] = 0;

    let mut slot = pit;
    while remaining > 0 {
        slot = next_slot(mover, slot);
        next.slots[slot] += 1;
        steps.push(Step::sow(slot));
        remaining -= 1;
    }
    let landing_pit = slot;

    let captured = capture(&mut next, mover, landing_pit, &mut steps);

    let extra_turn = landing_pit == mover.store();
    if !extra_turn {
        next.current_player = mover.opponent();
    }

    debug!(
        player = %mover,
        pit,
        landing_pit,
        captured,
        extra_turn,
        steps = steps.len(),
        "move applied"
    );

    Ok(MoveOutcome {
        pit,
        state: check_game_over(&next),
        steps,
        landing_pit,
        captured,
        extra_turn,
    })
}

/// Play `pit` and keep only the resulting state.
pub fn make_move(state: &BoardState, pit: usize) -> Result<BoardState, RuleError> {
    apply_move(state, pit).map(|outcome| outcome.state)
}

/// Capture into the mover's store if the last seed landed in one of their
/// previously empty pits across from a non-empty pit.
///
/// Returns the number of seeds captured.
fn capture(state: &mut BoardState, mover: Player, landing: usize, steps: &mut Steps) -> u8 {
    if !mover.owns_pit(landing) || state.slots[landing] != 1 {
        return 0;
    }
    let Some(opposite) = opposite_pit(landing) else {
        return 0;
    };
    if state.slots[opposite] == 0 {
        return 0;
    }

    let landed = state.slots[landing];
    let taken = state.slots[opposite];
    let total = landed + taken;
    let store = mover.store();

    state.slots[store] += total;
    steps.push(Step::new(store, i32::from(total)));
    steps.push(Step::new(landing, -i32::from(landed)));
    steps.push(Step::new(opposite, -i32::from(taken)));
    state.slots[landing] = 0;
    state.slots[opposite] = 0;

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TOTAL_SEEDS;

    fn slots(pairs: &[(usize, u8)]) -> [u8; SLOT_COUNT] {
        let mut s = [0; SLOT_COUNT];
        for &(i, v) in pairs {
            s[i] = v;
        }
        s
    }

    #[test]
    fn test_next_slot_skips_opponent_store() {
        assert_eq!(next_slot(Player::One, 5), 6);
        assert_eq!(next_slot(Player::One, 12), 0);
        assert_eq!(next_slot(Player::Two, 5), 7);
        assert_eq!(next_slot(Player::Two, 12), 13);
        assert_eq!(next_slot(Player::Two, 13), 0);
    }

    #[test]
    fn test_landing_pit() {
        assert_eq!(landing_pit(Player::One, 0, 6), 6);
        assert_eq!(landing_pit(Player::One, 5, 8), 0);
        assert_eq!(landing_pit(Player::Two, 7, 6), 13);
        // A full lap of 13 returns to the source pit.
        assert_eq!(landing_pit(Player::One, 3, 13), 3);
        assert_eq!(landing_pit(Player::Two, 10, 13), 10);
    }

    #[test]
    fn test_opening_move_from_pit_3() {
        let outcome = apply_move(&initial_state(), 3).unwrap();

        assert_eq!(outcome.state.slots, [4, 4, 4, 0, 5, 5, 1, 5, 4, 4, 4, 4, 4, 0]);
        assert_eq!(outcome.state.current_player, Player::Two);
        assert_eq!(outcome.state.last_move, Some(3));
        assert_eq!(outcome.pit, 3);
        assert_eq!(outcome.landing_pit, 7);
        assert_eq!(outcome.captured, 0);
        assert!(!outcome.extra_turn);

        let targets: Vec<_> = outcome.steps.iter().map(|s| s.target).collect();
        assert_eq!(targets, vec![4, 5, 6, 7]);
        assert!(outcome.steps.iter().all(|s| s.delta == 1));
    }

    #[test]
    fn test_extra_turn() {
        let outcome = apply_move(&initial_state(), 3).unwrap();
        assert!(!outcome.extra_turn);

        // Four seeds from pit 2 end in the store.
        let state = BoardState::from_slots(
            slots(&[(2, 4), (1, 1), (9, 3)]),
            Player::One,
        );
        let outcome = apply_move(&state, 2).unwrap();
        assert!(outcome.extra_turn);
        assert_eq!(outcome.landing_pit, 6);
        assert_eq!(outcome.state.current_player, Player::One);
    }

    #[test]
    fn test_capture() {
        // Pit 1 sows one seed into empty pit 2; pit 10 sits opposite.
        let state = BoardState::from_slots(
            slots(&[(1, 1), (10, 5), (4, 2), (8, 3)]),
            Player::One,
        );
        let outcome = apply_move(&state, 1).unwrap();

        assert_eq!(outcome.captured, 6);
        assert_eq!(outcome.state.slots[2], 0);
        assert_eq!(outcome.state.slots[10], 0);
        assert_eq!(outcome.state.slots[6], 6);
        assert_eq!(outcome.state.current_player, Player::Two);
        assert_eq!(
            outcome.steps.as_slice(),
            &[
                Step::sow(2),
                Step::new(6, 6),
                Step::new(2, -1),
                Step::new(10, -5),
            ]
        );
    }

    #[test]
    fn test_no_capture_opposite_empty() {
        let state = BoardState::from_slots(
            slots(&[(1, 1), (4, 2), (8, 3)]),
            Player::One,
        );
        let outcome = apply_move(&state, 1).unwrap();

        assert_eq!(outcome.captured, 0);
        assert_eq!(outcome.state.slots[2], 1);
        assert_eq!(outcome.steps.len(), 1);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        // Last seed lands in Player Two's empty pit 7.
        let state = BoardState::from_slots(
            slots(&[(5, 2), (0, 3), (9, 1)]),
            Player::One,
        );
        let outcome = apply_move(&state, 5).unwrap();

        assert_eq!(outcome.landing_pit, 7);
        assert_eq!(outcome.captured, 0);
        assert_eq!(outcome.state.slots[7], 1);
    }

    #[test]
    fn test_player_two_skips_player_one_store() {
        let state = BoardState::from_slots(
            slots(&[(12, 8), (3, 1), (9, 2)]),
            Player::Two,
        );
        let outcome = apply_move(&state, 12).unwrap();

        assert!(outcome.steps.iter().all(|s| s.target != 6));
        assert_eq!(outcome.state.slots[6], 0);
        assert_eq!(outcome.landing_pit, 7);
        // Pit 7 was empty and pit 5 just received a seed.
        assert_eq!(outcome.captured, 2);
        assert_eq!(outcome.state.slots[13], 3);
    }

    #[test]
    fn test_full_lap_captures_source_pit() {
        // Thirteen seeds go all the way round and land back in the emptied pit.
        let state = BoardState::from_slots(
            slots(&[(0, 13), (1, 4), (12, 3)]),
            Player::One,
        );
        let outcome = apply_move(&state, 0).unwrap();

        assert_eq!(outcome.landing_pit, 0);
        // Pit 12 held 3 and received one seed.
        assert_eq!(outcome.captured, 5);
        assert_eq!(outcome.state.slots[0], 0);
        assert_eq!(outcome.state.slots[12], 0);
        assert_eq!(outcome.state.total_seeds(), state.total_seeds());
    }

    #[test]
    fn test_invalid_moves() {
        let state = initial_state();

        assert_eq!(
            apply_move(&state, 8),
            Err(RuleError::invalid(8, InvalidMoveReason::NotOwnPit))
        );
        assert_eq!(
            apply_move(&state, 6),
            Err(RuleError::invalid(6, InvalidMoveReason::NotOwnPit))
        );
        assert_eq!(
            apply_move(&state, 14),
            Err(RuleError::invalid(14, InvalidMoveReason::PitOutOfRange))
        );

        let after = make_move(&state, 2).unwrap();
        let back = BoardState { current_player: Player::One, ..after };
        assert_eq!(
            apply_move(&back, 2),
            Err(RuleError::invalid(2, InvalidMoveReason::EmptyPit))
        );

        let mut over = state;
        over.game_over = true;
        assert_eq!(
            apply_move(&over, 0),
            Err(RuleError::invalid(0, InvalidMoveReason::GameOver))
        );
    }

    #[test]
    fn test_conservation_single_move() {
        let state = initial_state();
        for pit in 0..6 {
            let next = make_move(&state, pit).unwrap();
            assert_eq!(next.total_seeds(), TOTAL_SEEDS);
        }
    }

    #[test]
    fn test_steps_reproduce_state() {
        let state = BoardState::from_slots(
            slots(&[(1, 1), (10, 5), (4, 2), (8, 3)]),
            Player::One,
        );
        let outcome = apply_move(&state, 1).unwrap();

        let mut replay = state;
        replay.slots[1] = 0;
        for step in &outcome.steps {
            replay.apply_step(*step);
        }
        assert_eq!(replay.slots, outcome.state.slots);
    }
}
