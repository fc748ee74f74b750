//! Expense table view
//!
//! Shows the raw expense history, oldest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

use super::truncate_string;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.ledger.is_empty() {
        let text = Paragraph::new("No expenses added yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(16),    // Description
        Constraint::Length(12), // Amount
        Constraint::Length(14), // Paid by
        Constraint::Min(20),    // Split among
        Constraint::Length(6),  // Added
    ];

    let header = Row::new(vec![
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Paid by").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Split among").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Added").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;

    let rows: Vec<Row> = app
        .ledger
        .expenses()
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(truncate_string(&expense.description, 30)),
                Cell::from(expense.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(truncate_string(&expense.payer, 14)),
                Cell::from(truncate_string(&expense.split_among.join(", "), 40)),
                Cell::from(expense.created_at.format("%H:%M").to_string())
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_expense_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
