//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch panel focus"),
        key_line("j/k", "Move selection up/down"),
        key_line("1/2/3", "Switch view (Expenses/Balances/Summary)"),
        key_line("p", "Edit participants"),
        key_line("a", "Add an expense"),
        key_line("x", "Export settlement summary (text)"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::Expenses => {
            lines.push(section_line("Expenses View"));
            lines.push(Line::from(""));
            lines.push(key_line("c", "Export expense table (CSV)"));
        }
        ActiveView::Balances => {
            lines.push(section_line("Balances View"));
            lines.push(Line::from(""));
            lines.push(key_line("J", "Export session snapshot (JSON)"));
        }
        ActiveView::Summary => {
            lines.push(section_line("Summary View"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Shows the exact text written by the summary export.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn section_line(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}

/// Handle key input for the help dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            app.close_dialog();
            true
        }
        _ => false,
    }
}
