//! Balance table view
//!
//! Shows {Participant, Balance, Status}, recomputed from the full expense
//! history on every render.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::services::balance::BalanceStatus;
use crate::tui::app::App;

use super::{format_balance_with_symbol, truncate_string};

/// Render the balance table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Balances ")
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

    let widths = [
        Constraint::Min(16),    // Participant
        Constraint::Length(12), // Balance
        Constraint::Length(10), // Status
    ];

    let header = Row::new(vec![
        Cell::from("Participant").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Balance").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Status").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;

    let rows: Vec<Row> = balances
        .iter()
        .map(|entry| {
            let (status_text, color) = match entry.balance.status() {
                BalanceStatus::Owes => ("Owes", Color::Red),
                BalanceStatus::Receives => ("Receives", Color::Green),
                BalanceStatus::Settled => ("Settled", Color::DarkGray),
            };

            Row::new(vec![
                Cell::from(truncate_string(&entry.participant, 24)),
                Cell::from(format_balance_with_symbol(entry.balance, symbol))
                    .style(Style::default().fg(color)),
                Cell::from(status_text).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
