//! The controller's complete state as one serializable value.

use super::history::History;
use super::invariants::check_state;
use super::snapshot::Snapshot;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoveOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl MoveOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// A deserialized value that no sequence of events could have produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game state: {}", _0)]
pub struct InvalidState(#[error(not(source))] pub(crate) String);

/// History, time pointer, turn flag and list order.
///
/// Only [`apply`](crate::apply) produces new states from old ones, so
/// `current_step` always indexes into `history` and `to_move` always
/// matches the parity of `current_step`. Deserialization checks the same
/// invariants and rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) to_move: Player,
    pub(crate) order: MoveOrder,
}

/// Wire form of [`GameState`] before validation.
#[derive(Deserialize)]
struct RawGameState {
    history: History,
    current_step: usize,
    to_move: Player,
    order: MoveOrder,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            current_step: raw.current_step,
            to_move: raw.to_move,
            order: raw.order,
        };
        check_state(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvalidState(descriptions)
        })?;
        Ok(state)
    }
}

impl GameState {
    /// A fresh game: empty board, X to move, ascending list.
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// A fresh game with the given move-list order.
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            to_move: Player::X,
            order,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the player whose mark the next cell selection places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move-list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        &self.history.snapshots()[self.current_step]
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
