//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here is cached or
//! stored; callers re-derive outcomes from the board they are looking at.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Outcome, WinningLine, check_winner, evaluate, outcome};
