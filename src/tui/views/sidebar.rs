//! Sidebar view
//!
//! Shows the roster with each participant's current balance, and the view
//! switcher.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::services::balance::BalanceStatus;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

use super::{format_balance_with_symbol, truncate_string};

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_participants(frame, app, layout.participants);
    render_view_switcher(frame, app, layout.view_switcher);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Splitter ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the participant list with balances
fn render_participants(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Participants ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.ledger.roster().is_empty() {
        let text = Paragraph::new("No participants.\nPress 'p' to add some.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Balances are recomputed from the full history on every render
    let balances = app.balances();
    let symbol = &app.settings.currency_symbol;

    let items: Vec<ListItem> = app
        .ledger
        .roster()
        .iter()
        .map(|name| {
            let balance = balances.get(name).unwrap_or_default();
            let balance_color = match balance.status() {
                BalanceStatus::Owes => Color::Red,
                BalanceStatus::Receives => Color::Green,
                BalanceStatus::Settled => Color::DarkGray,
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<16}", truncate_string(name, 16)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>11}", format_balance_with_symbol(balance, symbol)),
                    Style::default().fg(balance_color),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_participant_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let views = [
        ("1", "Expenses", ActiveView::Expenses),
        ("2", "Balances", ActiveView::Balances),
        ("3", "Summary", ActiveView::Summary),
    ];

    let items: Vec<ListItem> = views
        .iter()
        .map(|(key, name, view)| {
            let style = if app.active_view == *view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if app.active_view == *view { "▶" } else { " " };

            let line = Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*name, style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
