//! One point in the game's timeline.

use super::position::Coordinate;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// A board plus the move that produced it.
///
/// The opening snapshot has no move; every later one records the
/// 1-indexed coordinate of the mark that was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Coordinate>,
}

impl Snapshot {
    /// The empty opening board.
    pub fn genesis() -> Self {
        Self::default()
    }

    /// A snapshot produced by a move at `coordinate`.
    pub fn after_move(board: Board, coordinate: Coordinate) -> Self {
        Self {
            board,
            last_move: Some(coordinate),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move descriptor, `None` for the opening snapshot.
    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move
    }
}
