//! Keyboard and mouse mapping onto game events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rewind_tictactoe::{GameEvent, GameState, MoveEntry, Position};

use crate::ui::ScreenLayout;

/// What the controller should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Feed a game event through the transition function.
    Dispatch(GameEvent),
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Leave the application.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps any terminal event.
pub fn map_event(
    event: &Event,
    state: &GameState,
    cursor: Position,
    layout: &ScreenLayout,
    moves: &[MoveEntry],
    mouse: bool,
) -> Action {
    match event {
        Event::Key(key) => map_key(*key, state, cursor),
        Event::Mouse(click) if mouse => map_mouse(*click, layout, moves),
        _ => Action::Ignore,
    }
}

/// Maps a key press.
pub fn map_key(key: KeyEvent, state: &GameState, cursor: Position) -> Action {
    // crossterm reports releases on some platforms
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }

    let step = state.current_step();
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(|position| Action::Dispatch(GameEvent::CellClicked { position }))
            .unwrap_or(Action::Ignore),
        KeyCode::Enter | KeyCode::Char(' ') => {
            Action::Dispatch(GameEvent::CellClicked { position: cursor })
        }
        KeyCode::Char('t') | KeyCode::Char('T') => Action::Dispatch(GameEvent::ToggleOrder),
        KeyCode::Char('[') if step > 0 => Action::Dispatch(GameEvent::JumpTo { step: step - 1 }),
        KeyCode::Char(']') => Action::Dispatch(GameEvent::JumpTo { step: step + 1 }),
        KeyCode::Home => Action::Dispatch(GameEvent::JumpTo { step: 0 }),
        KeyCode::End => Action::Dispatch(GameEvent::JumpTo {
            step: state.history().latest_step(),
        }),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Action::Cursor(move_cursor(cursor, code))
        }
        _ => Action::Ignore,
    }
}

/// Maps a left-button press through the layout's hit test.
pub fn map_mouse(event: MouseEvent, layout: &ScreenLayout, moves: &[MoveEntry]) -> Action {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .hit_test(event.column, event.row, moves)
            .map(Action::Dispatch)
            .unwrap_or(Action::Ignore),
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
