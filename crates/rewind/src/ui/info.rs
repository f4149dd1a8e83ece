//! Status line, move list and the toggle-order control.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{GameView, MoveOrder, Status};

use super::layout::ScreenLayout;

/// Renders the status block.
pub fn render_status(frame: &mut Frame, layout: &ScreenLayout, status: Status) {
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, layout.status);
}

/// Renders the move list, one clickable row per entry.
pub fn render_moves(frame: &mut Frame, layout: &ScreenLayout, view: &GameView, order: MoveOrder) {
    let title = match order {
        MoveOrder::Ascending => "Moves (oldest first)",
        MoveOrder::Descending => "Moves (newest first)",
    };
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(title),
        layout.moves,
    );

    for (entry, area) in view.moves.iter().zip(&layout.entries) {
        let (marker, style) = if entry.selected {
            ("▶ ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };
        let line = Line::from(vec![
            Span::styled(marker, style),
            Span::styled(entry.label.as_str(), style.add_modifier(Modifier::UNDERLINED)),
        ]);
        frame.render_widget(Paragraph::new(line), *area);
    }
}

/// Renders the toggle-order button.
pub fn render_toggle(frame: &mut Frame, layout: &ScreenLayout) {
    let button = Paragraph::new("Toggle Order")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, layout.toggle);
}
