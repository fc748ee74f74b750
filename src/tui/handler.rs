//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: an open dialog always gets the keys first.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Route keys to the active dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::Participants => {
            dialogs::participants::handle_key(app, key);
        }
        ActiveDialog::Help => {
            dialogs::help::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        // Help
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
        }

        // Panel navigation
        KeyCode::Tab => {
            app.toggle_panel_focus();
        }

        // View switching
        KeyCode::Char('1') => app.switch_view(ActiveView::Expenses),
        KeyCode::Char('2') => app.switch_view(ActiveView::Balances),
        KeyCode::Char('3') => app.switch_view(ActiveView::Summary),

        // Selection movement
        KeyCode::Char('j') | KeyCode::Down => {
            let len = match app.focused_panel {
                FocusedPanel::Sidebar => app.ledger.roster().len(),
                FocusedPanel::Main => app.ledger.expense_count(),
            };
            app.move_down(len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Edit participants
        KeyCode::Char('p') => {
            app.participants_form =
                dialogs::participants::ParticipantsFormState::for_roster(app.ledger.roster());
            app.open_dialog(ActiveDialog::Participants);
        }

        // Add an expense
        KeyCode::Char('a') | KeyCode::Char('n') => {
            if app.ledger.roster().is_empty() {
                app.set_status("Add participants first (press 'p')");
            } else {
                app.expense_form =
                    dialogs::expense::ExpenseFormState::for_roster(app.ledger.roster());
                app.open_dialog(ActiveDialog::AddExpense);
            }
        }

        // Export the settlement summary
        KeyCode::Char('x') => {
            export_summary(app);
        }

        // Export the expense table (expenses view)
        KeyCode::Char('c') if app.active_view == ActiveView::Expenses => {
            export_expenses_csv(app);
        }

        // Export the session snapshot (balances view)
        KeyCode::Char('J') if app.active_view == ActiveView::Balances => {
            export_session_json(app);
        }

        _ => {}
    }

    Ok(())
}

/// Write the settlement summary text file
fn export_summary(app: &mut App) {
    let balances = app.balances();
    if balances.is_empty() {
        app.set_status("Nothing to export yet");
        return;
    }

    match crate::export::write_summary_file(&app.settings.export_dir(), &balances) {
        Ok(path) => app.set_status(format!("Summary written to {}", path.display())),
        Err(e) => app.set_status(e.to_string()),
    }
}

/// Write the expense table CSV
fn export_expenses_csv(app: &mut App) {
    if app.ledger.is_empty() {
        app.set_status("No expenses to export");
        return;
    }

    match crate::export::write_expenses_csv_file(&app.settings.export_dir(), &app.ledger) {
        Ok(path) => app.set_status(format!("Expenses written to {}", path.display())),
        Err(e) => app.set_status(e.to_string()),
    }
}

/// Write the session snapshot JSON
fn export_session_json(app: &mut App) {
    if app.ledger.roster().is_empty() && app.ledger.is_empty() {
        app.set_status("Nothing to export yet");
        return;
    }

    match crate::export::write_session_json_file(&app.settings.export_dir(), &app.ledger) {
        Ok(path) => app.set_status(format!("Session written to {}", path.display())),
        Err(e) => app.set_status(e.to_string()),
    }
}
