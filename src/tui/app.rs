//! Application state for the TUI
//!
//! The App struct owns the session ledger and everything needed for
//! rendering and handling events. Balances are never cached here: every
//! render recomputes them from the full expense history.

use crate::config::settings::Settings;
use crate::models::{Ledger, Roster};
use crate::services::balance::{compute_balances, Balances};

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::participants::ParticipantsFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Expenses,
    Balances,
    Summary,
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Participants,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The session ledger: roster plus expense history
    pub ledger: Ledger,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected participant index in the sidebar
    pub selected_participant_index: usize,

    /// Selected expense index in the expense table
    pub selected_expense_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Expense form state
    pub expense_form: ExpenseFormState,

    /// Participants form state
    pub participants_form: ParticipantsFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    ///
    /// The roster starts from the settings' default participant list; the
    /// expense history always starts empty.
    pub fn new(settings: &'a Settings) -> Self {
        let roster = Roster::from_names(&settings.default_participants);
        Self {
            settings,
            ledger: Ledger::with_roster(roster),
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_participant_index: 0,
            selected_expense_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
            participants_form: ParticipantsFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Switch the active view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.clear_status();
    }

    /// Recompute balances over the full expense history
    pub fn balances(&self) -> Balances {
        compute_balances(&self.ledger)
    }

    /// Move a selection down, clamped to the list length
    pub fn move_down(&mut self, len: usize) {
        let index = self.selected_index_mut();
        if len > 0 && *index + 1 < len {
            *index += 1;
        }
    }

    /// Move a selection up
    pub fn move_up(&mut self) {
        let index = self.selected_index_mut();
        *index = index.saturating_sub(1);
    }

    /// Clamp selections after the underlying lists changed
    pub fn clamp_selections(&mut self) {
        let participants = self.ledger.roster().len();
        if self.selected_participant_index >= participants {
            self.selected_participant_index = participants.saturating_sub(1);
        }
        let expenses = self.ledger.expense_count();
        if self.selected_expense_index >= expenses {
            self.selected_expense_index = expenses.saturating_sub(1);
        }
    }

    fn selected_index_mut(&mut self) -> &mut usize {
        match self.focused_panel {
            FocusedPanel::Sidebar => &mut self.selected_participant_index,
            FocusedPanel::Main => &mut self.selected_expense_index,
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }
}
