//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use super::draw::is_full;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, scanned in this order.
///
/// Order matters: when a board holds more than one uniform triple the
/// earliest entry wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct WinningLine {
    /// The three positions of the line.
    pub line: [Position; 3],
    /// The player holding all three.
    pub player: Player,
}

impl WinningLine {
    /// Returns true if `pos` is one of the three cells of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Finds the first uniform, non-empty triple on the board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinningLine::new([a, b, c], player))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|won| won.player)
}

/// Classification of a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and at least one empty square.
    Undecided,
    /// A player completed a line.
    Won(WinningLine),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(won) => Some(won.player),
            _ => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Classifies the board as exactly one of undecided, won, or drawn.
pub fn outcome(board: &Board) -> Outcome {
    match evaluate(board) {
        Some(won) => Outcome::Won(won),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Undecided,
    }
}
