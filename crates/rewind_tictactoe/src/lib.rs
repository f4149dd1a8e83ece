//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! The whole game is one [`GameState`] value. Front ends turn user input
//! into [`GameEvent`]s, feed them through [`apply`], and draw the
//! [`GameView`] derived from the result.
//!
//! ```
//! use rewind_tictactoe::{DrawPolicy, GameEvent, GameState, GameView, Position, apply};
//!
//! let state = GameState::new();
//! let state = apply(&state, GameEvent::CellClicked { position: Position::Center })?;
//! let view = GameView::derive(&state, DrawPolicy::Announce);
//! assert_eq!(view.status.to_string(), "Next player: O");
//! assert_eq!(view.moves[1].label, "Move #1: (2, 2)");
//! # Ok::<(), rewind_tictactoe::Rejection>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod event;
mod history;
mod position;
mod snapshot;
mod state;
mod transition;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod view;

pub use event::{GameEvent, Rejection};
pub use history::History;
pub use position::{Coordinate, Position};
pub use rules::{Outcome, WinningLine, check_winner, evaluate, is_draw, is_full, outcome};
pub use snapshot::Snapshot;
pub use state::{GameState, InvalidState, MoveOrder};
pub use transition::apply;
pub use types::{Board, Player, Square};
pub use view::{CellView, DrawPolicy, GameView, MoveEntry, Status};
