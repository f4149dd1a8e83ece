//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{CellView, Player, Position, Square};

use super::layout::ScreenLayout;

/// Renders the grid: cell values, winning-line highlight, keyboard cursor.
pub fn render_board(frame: &mut Frame, layout: &ScreenLayout, cells: &[CellView; 9], cursor: Position) {
    let pane = Block::default().borders(Borders::ALL).title("Board");
    frame.render_widget(pane, layout.board_pane);

    for (cell, area) in cells.iter().zip(layout.cells) {
        render_cell(frame, area, cell, cell.position == cursor);
    }
    for area in layout.row_separators {
        render_separator(frame, area);
    }
    for area in layout.col_separators {
        render_vertical_sep(frame, area);
    }
}

fn cell_style(cell: &CellView, under_cursor: bool) -> Style {
    let base = match cell.square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let base = if cell.highlighted {
        base.bg(Color::Green).fg(Color::Black)
    } else {
        base
    };

    if under_cursor {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let text = match cell.square {
        Square::Empty => (cell.position.to_index() + 1).to_string(),
        occupied => occupied.symbol().to_string(),
    };

    // Pad above so the symbol sits on the middle line.
    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::from(text));

    let paragraph = Paragraph::new(lines)
        .style(cell_style(cell, under_cursor))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
