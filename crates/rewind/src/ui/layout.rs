//! Screen geometry shared by rendering and mouse hit testing.
//!
//! The renderer draws into exactly these rectangles, so a click can be
//! mapped back to the control under it without any widget state.

use ratatui::layout::{Constraint, Direction, Layout, Position as Point, Rect};
use ratatui::widgets::{Block, Borders};
use rewind_tictactoe::{GameEvent, MoveEntry, Position};

/// Width of one board cell.
pub const CELL_WIDTH: u16 = 12;
/// Height of one board cell.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the three cells plus two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the three rows plus two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Where every control sits for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered pane around the board.
    pub board_pane: Rect,
    /// The nine cells, row-major.
    pub cells: [Rect; 9],
    /// Horizontal separators between rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators, two per row.
    pub col_separators: [Rect; 6],
    /// Status line.
    pub status: Rect,
    /// Bordered move-list pane.
    pub moves: Rect,
    /// One row per visible move-list entry, in display order.
    pub entries: Vec<Rect>,
    /// Toggle-order control.
    pub toggle: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` for a move list of `entry_count` entries.
    ///
    /// Entries that do not fit get no rectangle and cannot be clicked.
    pub fn compute(area: Rect, entry_count: usize) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(0)])
            .split(outer[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(3),    // Moves
                Constraint::Length(3), // Toggle
            ])
            .split(body[1]);

        let board_pane = body[0];
        let grid = center_rect(bordered_inner(board_pane), BOARD_WIDTH, BOARD_HEIGHT);
        let (cells, row_separators, col_separators) = split_grid(grid);

        let list = bordered_inner(info[1]);
        let entries = (0..entry_count)
            .take(list.height as usize)
            .map(|i| Rect::new(list.x, list.y + i as u16, list.width, 1))
            .collect();

        Self {
            title: outer[0],
            board_pane,
            cells,
            row_separators,
            col_separators,
            status: info[0],
            moves: info[1],
            entries,
            toggle: info[2],
            help: outer[2],
        }
    }

    /// Maps a click at (`column`, `row`) to the event of the control there.
    ///
    /// `moves` must be the entry list this layout was computed for.
    pub fn hit_test(&self, column: u16, row: u16, moves: &[MoveEntry]) -> Option<GameEvent> {
        let point = Point::new(column, row);

        if let Some(idx) = self.cells.iter().position(|r| r.contains(point)) {
            return Position::from_index(idx).map(|position| GameEvent::CellClicked { position });
        }

        if let Some(idx) = self.entries.iter().position(|r| r.contains(point)) {
            return moves.get(idx).map(|entry| GameEvent::JumpTo { step: entry.step });
        }

        if self.toggle.contains(point) {
            return Some(GameEvent::ToggleOrder);
        }

        None
    }
}

fn bordered_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

type Grid = ([Rect; 9], [Rect; 2], [Rect; 6]);

fn split_grid(grid: Rect) -> Grid {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    let mut col_separators = [Rect::default(); 6];
    for r in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[r * 2]);
        for c in 0..3 {
            cells[r * 3 + c] = cols[c * 2];
        }
        col_separators[r * 2] = cols[1];
        col_separators[r * 2 + 1] = cols[3];
    }

    (cells, [rows[1], rows[3]], col_separators)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{DrawPolicy, GameState, GameView};

    fn center_of(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_cells_do_not_overlap_and_fit_the_pane() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30), 1);
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            assert!(layout.board_pane.contains(Point::new(a.x, a.y)));
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_click_on_each_cell() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30), 1);
        for (idx, rect) in layout.cells.iter().enumerate() {
            let (x, y) = center_of(*rect);
            assert_eq!(
                layout.hit_test(x, y, &[]),
                Some(GameEvent::CellClicked {
                    position: Position::from_index(idx).expect("0-8"),
                })
            );
        }
    }

    #[test]
    fn test_click_on_separator_or_title_is_nothing() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30), 1);
        let (x, y) = center_of(layout.row_separators[0]);
        assert_eq!(layout.hit_test(x, y, &[]), None);
        let (x, y) = center_of(layout.title);
        assert_eq!(layout.hit_test(x, y, &[]), None);
    }

    #[test]
    fn test_click_on_entry_uses_display_order() {
        let state = GameState::replay(&[Position::Center, Position::TopLeft]).expect("legal");
        let state = rewind_tictactoe::apply(&state, GameEvent::ToggleOrder).expect("toggle");
        let view = GameView::derive(&state, DrawPolicy::Announce);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30), view.moves.len());

        assert_eq!(layout.entries.len(), 3);
        let (x, y) = center_of(layout.entries[0]);
        assert_eq!(
            layout.hit_test(x, y, &view.moves),
            Some(GameEvent::JumpTo { step: 2 })
        );
        let (x, y) = center_of(layout.entries[2]);
        assert_eq!(
            layout.hit_test(x, y, &view.moves),
            Some(GameEvent::JumpTo { step: 0 })
        );
    }

    #[test]
    fn test_click_on_toggle() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 30), 1);
        let (x, y) = center_of(layout.toggle);
        assert_eq!(layout.hit_test(x, y, &[]), Some(GameEvent::ToggleOrder));
    }

    #[test]
    fn test_short_terminal_clips_entries() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 16), 10);
        let list_rows = layout.moves.height.saturating_sub(2) as usize;
        assert_eq!(layout.entries.len(), list_rows);
        assert!(layout.entries.len() < 10);
    }
}
