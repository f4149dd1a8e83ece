//! Invariants on the time pointer.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the current step indexes into history.
pub struct StepInBounds;

impl Invariant<GameState> for StepInBounds {
    fn holds(state: &GameState) -> bool {
        state.current_step < state.history.len()
    }

    fn description() -> &'static str {
        "Current step is a valid index into history"
    }
}

/// Invariant: X moves on even steps, O on odd ones.
pub struct TurnMatchesStep;

impl Invariant<GameState> for TurnMatchesStep {
    fn holds(state: &GameState) -> bool {
        state.to_move == Player::for_step(state.current_step)
    }

    fn description() -> &'static str {
        "Player to move matches the parity of the current step"
    }
}
