//! Application state and the event loop.

use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend};
use rewind_tictactoe::{DrawPolicy, GameEvent, GameState, GameView, Position};
use tracing::{debug, info, instrument};

use crate::config::RewindConfig;
use crate::input::{self, Action};
use crate::ui::{self, ScreenLayout};

/// The game controller: sole owner of the [`GameState`].
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    draws: DrawPolicy,
    mouse: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &RewindConfig) -> Self {
        Self {
            state: GameState::with_order(*config.move_order()),
            cursor: Position::Center,
            draws: config.draw_policy(),
            mouse: *config.mouse(),
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Derives the view for the current state.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.state, self.draws)
    }

    /// Applies a game event; rejected events change nothing.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn dispatch(&mut self, event: GameEvent) {
        match self.state.dispatch(event) {
            Ok(()) => debug!(
                step = self.state.current_step(),
                to_move = %self.state.to_move(),
                "State updated"
            ),
            Err(reason) => debug!(%reason, "Event ignored"),
        }
    }

    /// Handles one terminal event against the layout of the last frame.
    pub fn handle_event(&mut self, event: &Event, layout: &ScreenLayout) {
        let moves = self.view().moves;
        let action = input::map_event(event, &self.state, self.cursor, layout, &moves, self.mouse);
        match action {
            Action::Dispatch(game_event) => self.dispatch(game_event),
            Action::Cursor(position) => self.cursor = position,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Ignore => {}
        }
    }
}

/// Runs the event loop, reading input from crossterm.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    run_with(terminal, app, event::read)
}

/// Runs the event loop with a custom input source.
///
/// Draws, waits for one event, applies it, and repeats until the app
/// quits or the source fails.
#[instrument(skip_all)]
pub fn run_with<B, F>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: F) -> anyhow::Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    F: FnMut() -> std::io::Result<Event>,
{
    info!("Starting event loop");
    loop {
        let mut layout = ScreenLayout::default();
        terminal.draw(|f| layout = ui::draw(f, app))?;

        if app.should_quit() {
            info!("Event loop finished");
            return Ok(());
        }

        let event = next_event()?;
        app.handle_event(&event, &layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rewind_tictactoe::{MoveOrder, Player};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_new_app_follows_config() {
        let config = RewindConfig::default()
            .with_move_order(MoveOrder::Descending)
            .with_announce_draw(false);
        let app = App::new(&config);
        assert_eq!(app.state().order(), MoveOrder::Descending);
        assert_eq!(app.cursor(), Position::Center);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_keys_drive_the_game() {
        let mut app = App::new(&RewindConfig::default());
        let layout = ScreenLayout::default();

        app.handle_event(&key('5'), &layout);
        app.handle_event(&key('1'), &layout);
        assert_eq!(app.state().history().len(), 3);
        assert_eq!(app.state().to_move(), Player::X);

        app.handle_event(&key('['), &layout);
        assert_eq!(app.state().current_step(), 1);
        assert_eq!(app.state().to_move(), Player::O);

        // Occupied: ignored.
        app.handle_event(&key('5'), &layout);
        assert_eq!(app.state().current_step(), 1);

        app.handle_event(&key('q'), &layout);
        assert!(app.should_quit());
    }
}
