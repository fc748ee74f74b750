//! Settlement summary view
//!
//! Shows the exact text the summary export writes.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::services::summary::format_summary;
use crate::tui::app::App;

/// Render the settlement summary
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Settlement Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let balances = app.balances();

    if balances.is_empty() {
        let text = Paragraph::new("No participants. Press 'p' to add some.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let summary = format_summary(&balances);
    let footer = "\nPress 'x' to export this summary as expense_summary.txt";

    let paragraph = Paragraph::new(format!("{}{}", summary, footer))
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
