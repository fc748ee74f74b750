//! Status bar view
//!
//! Shows session totals, the latest status message, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    // Session totals
    let total = app
        .ledger
        .total_spent()
        .format_with_symbol(&app.settings.currency_symbol);
    spans.push(Span::styled(" Total: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        total,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!(
            "{} expenses, {} participants",
            app.ledger.expense_count(),
            app.ledger.roster().len()
        ),
        Style::default().fg(Color::Cyan),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " a:Add  p:Participants  x:Export  ?:Help  q:Quit ";

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
