//! Tagged input events and the reasons an event can be turned away.
//!
//! Every control on the display dispatches one of these values into
//! [`apply`](crate::apply). Nothing closes over per-cell state.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// A user action, independent of how it was produced (click or key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A board cell was activated.
    CellClicked {
        /// The cell.
        position: Position,
    },
    /// A move-list entry was activated.
    JumpTo {
        /// History step of the entry.
        step: usize,
    },
    /// The move-list order control was activated.
    ToggleOrder,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CellClicked { position } => write!(f, "select {}", position),
            GameEvent::JumpTo { step } => write!(f, "jump to step {}", step),
            GameEvent::ToggleOrder => write!(f, "toggle order"),
        }
    }
}

/// Why an event left the state unchanged.
///
/// The controller swallows these; they exist so the rules can be
/// asserted on and traced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameDecided(#[error(not(source))] Player),

    /// The requested step is not in the history.
    #[display("Step {} is outside history of length {}", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
