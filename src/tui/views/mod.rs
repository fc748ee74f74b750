//! TUI views module
//!
//! The main views (expenses, balances, summary), the sidebar, and the
//! status bar.

pub mod balances;
pub mod expenses;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render sidebar
    sidebar::render(frame, app, layout.sidebar);

    // Render main view based on active view
    match app.active_view {
        ActiveView::Expenses => {
            expenses::render(frame, app, layout.main);
        }
        ActiveView::Balances => {
            balances::render(frame, app, layout.main);
        }
        ActiveView::Summary => {
            summary::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::Participants => {
            dialogs::participants::render(frame, app);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}

/// Truncate a string to a maximum length
pub(crate) fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Format a signed balance with the configured currency symbol, e.g. "-$50.00"
pub(crate) fn format_balance_with_symbol(
    balance: crate::services::balance::Balance,
    symbol: &str,
) -> String {
    let amount = balance.amount();
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a very long name", 7), "a very…");
    }

    #[test]
    fn test_format_balance_with_symbol() {
        use crate::models::{Expense, Ledger, Money, Roster};
        use crate::services::balance::compute_balances;

        let mut ledger = Ledger::with_roster(Roster::parse_list("Alice, Bob"));
        ledger
            .add_expense(
                Expense::new(
                    "Dinner",
                    Money::from_cents(10000),
                    "Alice",
                    vec!["Alice".to_string(), "Bob".to_string()],
                )
                .unwrap(),
            )
            .unwrap();
        let balances = compute_balances(&ledger);

        assert_eq!(
            format_balance_with_symbol(balances.get("Alice").unwrap(), "$"),
            "$50.00"
        );
        assert_eq!(
            format_balance_with_symbol(balances.get("Bob").unwrap(), "$"),
            "-$50.00"
        );
    }
}
