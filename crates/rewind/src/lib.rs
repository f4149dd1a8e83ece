//! Rewind - terminal tic-tac-toe with time travel.
//!
//! A ratatui front end for [`rewind_tictactoe`]. The [`App`] owns the game
//! state; clicks and key presses become [`GameEvent`](rewind_tictactoe::GameEvent)s
//! and every frame is drawn from a freshly derived view.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file plus CLI overrides
//! - **Input**: mouse hit testing and key bindings mapped to game events
//! - **UI**: stateless rendering into a [`ScreenLayout`] that input reuses
//! - **App**: the controller and its event loop
//! - **Terminal**: raw-mode guard that restores the shell on every exit path

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use app::{App, run, run_with};
pub use cli::Cli;
pub use config::{ConfigError, RewindConfig};
pub use ui::ScreenLayout;
