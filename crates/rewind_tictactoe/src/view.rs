//! Render-ready projection of a [`GameState`].
//!
//! Nothing here is stored. Front ends call [`GameView::derive`] on every
//! frame and draw the result; the winner and winning line come straight
//! from the evaluator on the current board.

use super::position::Position;
use super::rules::{self, Outcome, WinningLine};
use super::state::{GameState, MoveOrder};
use super::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a full board with no line is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawPolicy {
    /// Show a dedicated "Draw" status.
    #[default]
    Announce,
    /// Fall through to "Next player", as the classic tutorial board does.
    FallThrough,
}

/// The status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// Play continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One board cell as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Which cell.
    pub position: Position,
    /// Its contents.
    pub square: Square,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step the entry jumps to.
    pub step: usize,
    /// "Game start" or "Move #n: (r, c)".
    pub label: String,
    /// Entry for the step currently shown.
    pub selected: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The nine cells in row-major order.
    pub cells: [CellView; 9],
    /// Winning line on the current board, if any.
    pub winning_line: Option<WinningLine>,
    /// Status line.
    pub status: Status,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Projects `state` into a view.
    #[instrument(skip(state), fields(step = state.current_step()))]
    pub fn derive(state: &GameState, draws: DrawPolicy) -> Self {
        let board = state.board();
        let outcome = rules::outcome(board);
        let winning_line = match outcome {
            Outcome::Won(won) => Some(won),
            _ => None,
        };

        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: winning_line.is_some_and(|won| won.contains(position)),
        });

        Self {
            cells,
            winning_line,
            status: status(outcome, state.to_move(), draws),
            moves: move_entries(state),
        }
    }

    /// Winner on the current board.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line.map(|won| won.player)
    }
}

/// Status text for an outcome.
pub fn status(outcome: Outcome, to_move: Player, draws: DrawPolicy) -> Status {
    match (outcome, draws) {
        (Outcome::Won(won), _) => Status::Winner(won.player),
        (Outcome::Draw, DrawPolicy::Announce) => Status::Draw,
        _ => Status::NextPlayer(to_move),
    }
}

/// Label of the move-list entry for `step`.
pub fn move_label(state: &GameState, step: usize) -> String {
    match state.history().get(step).and_then(|s| s.last_move()) {
        Some(coordinate) if step > 0 => format!("Move #{}: {}", step, coordinate),
        _ => "Game start".to_string(),
    }
}

/// Move-list entries in display order.
pub fn move_entries(state: &GameState) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = (0..state.history().len())
        .map(|step| MoveEntry {
            step,
            label: move_label(state, step),
            selected: step == state.current_step(),
        })
        .collect();
    if state.order() == MoveOrder::Descending {
        entries.reverse();
    }
    entries
}
