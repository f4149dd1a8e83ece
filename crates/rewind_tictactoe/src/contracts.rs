//! Preconditions and postconditions for game events.
//!
//! Contracts formalize the Hoare-style reasoning: {P} event {Q}.

use super::event::{GameEvent, Rejection};
use super::invariants::check_state;
use super::position::Position;
use super::rules::check_winner;
use super::state::GameState;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Rejection>;
}

/// Precondition: the current snapshot has no winner.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with [`Rejection::GameDecided`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match check_winner(state.board()) {
            Some(winner) => Err(Rejection::GameDecided(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the selected cell is empty in the current snapshot.
pub struct CellIsOpen;

impl CellIsOpen {
    /// Fails with [`Rejection::SquareOccupied`] on an occupied cell.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &GameState) -> Result<(), Rejection> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(position))
        }
    }
}

/// Precondition: the step exists in history.
pub struct StepInRange;

impl StepInRange {
    /// Fails with [`Rejection::StepOutOfRange`] past the end of history.
    #[instrument(skip(state))]
    pub fn check(step: usize, state: &GameState) -> Result<(), Rejection> {
        let len = state.history().len();
        if step < len {
            Ok(())
        } else {
            Err(Rejection::StepOutOfRange { step, len })
        }
    }
}

/// Contract for every [`GameEvent`].
///
/// Preconditions:
/// - `CellClicked`: game undecided, then cell open
/// - `JumpTo`: step in range
/// - `ToggleOrder`: none
///
/// Postconditions: all [`StateInvariants`](crate::invariants::StateInvariants) hold.
pub struct EventContract;

impl Contract<GameState, GameEvent> for EventContract {
    fn pre(state: &GameState, event: &GameEvent) -> Result<(), Rejection> {
        match *event {
            GameEvent::CellClicked { position } => {
                GameUndecided::check(state)?;
                CellIsOpen::check(position, state)
            }
            GameEvent::JumpTo { step } => StepInRange::check(step, state),
            GameEvent::ToggleOrder => Ok(()),
        }
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), Rejection> {
        check_state(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Rejection::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, apply};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        let event = GameEvent::CellClicked {
            position: Position::Center,
        };
        assert!(EventContract::pre(&state, &event).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = GameState::replay(&[Position::Center]).expect("legal move");
        let event = GameEvent::CellClicked {
            position: Position::Center,
        };
        assert_eq!(
            EventContract::pre(&state, &event),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_decided_game_reported_before_occupied_cell() {
        let state = GameState::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .expect("legal moves");
        let event = GameEvent::CellClicked {
            position: Position::TopLeft,
        };
        assert_eq!(
            EventContract::pre(&state, &event),
            Err(Rejection::GameDecided(Player::X))
        );
    }

    #[test]
    fn test_precondition_step_range() {
        let state = GameState::new();
        assert!(EventContract::pre(&state, &GameEvent::JumpTo { step: 0 }).is_ok());
        assert_eq!(
            EventContract::pre(&state, &GameEvent::JumpTo { step: 1 }),
            Err(Rejection::StepOutOfRange { step: 1, len: 1 })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = apply(
            &before,
            GameEvent::CellClicked {
                position: Position::Center,
            },
        )
        .expect("legal move");
        assert!(EventContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        after.to_move = Player::O;
        assert!(matches!(
            EventContract::post(&before, &after),
            Err(Rejection::InvariantViolation(_))
        ));
    }
}
