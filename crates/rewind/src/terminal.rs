//! Raw-mode terminal setup and guaranteed teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument, warn};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, so early returns and
/// unwinding panics leave the shell usable.
#[derive(Debug)]
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen, capturing the mouse if asked.
    ///
    /// A failure after raw mode is enabled restores the terminal before
    /// the error is returned.
    #[instrument]
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { mouse };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        install_panic_hook(mouse);
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = restore(&mut io::stdout(), self.mouse) {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen, releasing the mouse if it
/// was captured. Safe to call more than once.
pub fn restore<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    let screen = leave_screen(out, mouse);
    disable_raw_mode()?;
    screen
}

/// Writes the escape sequences that undo [`TerminalGuard::enter`].
pub fn leave_screen<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen, Show)
}

// The default hook prints the panic message; restore first so it lands
// on the normal screen.
fn install_panic_hook(mouse: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore(&mut io::stdout(), mouse);
        previous(info);
    }));
}
