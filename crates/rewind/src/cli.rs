//! Command-line interface for rewind.

use crate::config::RewindConfig;
use clap::Parser;
use rewind_tictactoe::MoveOrder;
use std::path::PathBuf;
use tracing::instrument;

/// Rewind - tic-tac-toe with a clickable, time-travelling move list
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Initial move-list order (ascending or descending)
    #[arg(long)]
    pub order: Option<MoveOrder>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Layers command-line flags over file configuration.
    #[instrument(skip(config))]
    pub fn apply(&self, config: RewindConfig) -> RewindConfig {
        let mut config = config;
        if let Some(order) = self.order {
            config = config.with_move_order(order);
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        if self.no_mouse {
            config = config.with_mouse(false);
        }
        config
    }
}
