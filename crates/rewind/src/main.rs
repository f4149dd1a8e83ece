//! Rewind - terminal tic-tac-toe with a time-travelling move list.

use anyhow::Result;
use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind::{App, Cli, RewindConfig, logging, terminal::TerminalGuard};
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(RewindConfig::load(&cli.config)?);
    logging::init(&config)?;

    info!(
        config = %cli.config.display(),
        order = %config.move_order(),
        mouse = config.mouse(),
        "Starting rewind"
    );

    let mut app = App::new(&config);

    let guard = TerminalGuard::enter(*config.mouse())?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| rewind::run(&mut terminal, &mut app));
    drop(guard);

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        return Err(err);
    }

    info!(
        moves = app.state().history().len() - 1,
        "Goodbye"
    );
    Ok(())
}
