//! UI rendering using ratatui.

mod board;
mod info;
mod layout;

use crate::app::App;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use layout::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, ScreenLayout};

const HELP: &str = "Click a cell or move | 1-9/Enter: place | [ ]: step | t: toggle | q: quit";

/// Draws one frame and returns the layout it was drawn into.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let view = app.view();
    let layout = ScreenLayout::compute(frame.area(), view.moves.len());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    render_board(frame, &layout, &view.cells, app.cursor());
    info::render_status(frame, &layout, view.status);
    info::render_moves(frame, &layout, &view, app.state().order());
    info::render_toggle(frame, &layout);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);

    layout
}
