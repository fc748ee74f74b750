//! Expense entry dialog
//!
//! Modal dialog for recording a new expense: description, amount, payer
//! selection, and a split-among multi-select that defaults to the whole
//! roster. A submission that fails validation is rejected whole with one
//! generic message; nothing is partially accepted.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::error::{SplitterError, SplitterResult, INCOMPLETE_SUBMISSION_MESSAGE};
use crate::models::{Expense, Money, Participant, Roster};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Description,
    Amount,
    Payer,
    SplitAmong,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Payer,
            Self::Payer => Self::SplitAmong,
            Self::SplitAmong => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::SplitAmong,
            Self::Amount => Self::Description,
            Self::Payer => Self::Amount,
            Self::SplitAmong => Self::Payer,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Description input
    pub description_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Roster snapshot the selection indices refer to
    pub roster: Vec<Participant>,

    /// Selected payer index into the roster snapshot
    pub payer_index: usize,

    /// Split-among selection flags, aligned to the roster snapshot
    pub split_selected: Vec<bool>,

    /// Cursor position in the split-among list
    pub split_cursor: usize,

    /// Error message to display
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create an empty form state
    pub fn new() -> Self {
        Self {
            description_input: TextInput::new().placeholder("E.g., Dinner, Groceries"),
            amount_input: TextInput::new().placeholder("0.00"),
            ..Self::default()
        }
    }

    /// Create a form for the given roster, splitting among everyone by default
    pub fn for_roster(roster: &Roster) -> Self {
        let mut form = Self::new();
        form.roster = roster.names().to_vec();
        form.split_selected = vec![true; form.roster.len()];
        form
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the currently focused text input (if applicable)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            _ => None,
        }
    }

    /// Selected payer name, if the roster is non-empty
    pub fn selected_payer(&self) -> Option<&Participant> {
        self.roster.get(self.payer_index)
    }

    /// Names currently selected in the split-among list
    pub fn selected_split(&self) -> Vec<Participant> {
        self.roster
            .iter()
            .zip(&self.split_selected)
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Move the payer selection down
    pub fn next_payer(&mut self) {
        if !self.roster.is_empty() {
            self.payer_index = (self.payer_index + 1) % self.roster.len();
        }
    }

    /// Move the payer selection up
    pub fn prev_payer(&mut self) {
        if !self.roster.is_empty() {
            self.payer_index = (self.payer_index + self.roster.len() - 1) % self.roster.len();
        }
    }

    /// Move the split cursor down
    pub fn split_cursor_down(&mut self) {
        if !self.roster.is_empty() && self.split_cursor + 1 < self.roster.len() {
            self.split_cursor += 1;
        }
    }

    /// Move the split cursor up
    pub fn split_cursor_up(&mut self) {
        self.split_cursor = self.split_cursor.saturating_sub(1);
    }

    /// Toggle the split selection under the cursor
    pub fn toggle_split(&mut self) {
        if let Some(flag) = self.split_selected.get_mut(self.split_cursor) {
            *flag = !*flag;
        }
    }

    /// Build a validated expense from the form
    ///
    /// Every failure - blank description, unparseable or non-positive
    /// amount, no payer, empty split selection - collapses into the one
    /// generic incomplete-submission rejection.
    pub fn build_expense(&self) -> SplitterResult<Expense> {
        let payer = self
            .selected_payer()
            .ok_or(SplitterError::IncompleteSubmission)?
            .clone();

        let amount = Money::parse(self.amount_input.value())
            .map_err(|_| SplitterError::IncompleteSubmission)?;

        Expense::new(
            self.description_input.value(),
            amount,
            payer,
            self.selected_split(),
        )
        .map_err(|_| SplitterError::IncompleteSubmission)
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(64, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let form = &app.expense_form;
    let list_height = form.roster.len().clamp(1, 5) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Description
            Constraint::Length(1),           // Amount
            Constraint::Length(1),           // Paid by label
            Constraint::Length(list_height), // Payer list
            Constraint::Length(1),           // Split among label
            Constraint::Length(list_height), // Split list
            Constraint::Length(1),           // Spacer
            Constraint::Length(1),           // Error
            Constraint::Length(1),           // Hints
            Constraint::Min(0),              // Remaining
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "Description",
        &form.description_input,
        form.focused_field == ExpenseField::Description,
    );
    render_text_field(
        frame,
        chunks[1],
        "Amount",
        &form.amount_input,
        form.focused_field == ExpenseField::Amount,
    );

    render_list_label(
        frame,
        chunks[2],
        "Paid by",
        form.focused_field == ExpenseField::Payer,
    );
    render_payer_list(frame, form, chunks[3]);

    render_list_label(
        frame,
        chunks[4],
        "Split among",
        form.focused_field == ExpenseField::SplitAmong,
    );
    render_split_list(frame, form, chunks[5]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[7]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Space]", Style::default().fg(Color::White)),
        Span::raw(" Toggle split  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[8]);
}

/// Render a labelled text field with cursor
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let value_style = Style::default().fg(Color::White);

    let display_value = if input.value().is_empty() && !focused {
        input.placeholder.clone()
    } else {
        input.value().to_string()
    };

    let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];

    if focused {
        let cursor_pos = input.cursor.min(display_value.len());
        let (before, after) = display_value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if after.len() > cursor_char.len_utf8() {
            spans.push(Span::styled(
                after[cursor_char.len_utf8()..].to_string(),
                value_style,
            ));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a list section label
fn render_list_label(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let hint = if focused { " (↑/↓ to change)" } else { "" };
    let line = Line::from(vec![
        Span::styled(format!("{}:", label), label_style),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the payer selection list
fn render_payer_list(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let items: Vec<ListItem> = form
        .roster
        .iter()
        .map(|name| {
            ListItem::new(Line::from(Span::styled(
                format!("  {}", name),
                Style::default().fg(Color::White),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(form.payer_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the split-among checkbox list
fn render_split_list(frame: &mut Frame, form: &ExpenseFormState, area: Rect) {
    let focused = form.focused_field == ExpenseField::SplitAmong;

    let items: Vec<ListItem> = form
        .roster
        .iter()
        .zip(&form.split_selected)
        .map(|(name, selected)| {
            let checkbox = if *selected { "[x]" } else { "[ ]" };
            let style = if *selected {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{} {}", checkbox, name),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(form.split_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Handle key input for the expense dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            true
        }

        KeyCode::BackTab => {
            form.prev_field();
            true
        }

        KeyCode::Enter => {
            save_expense(app);
            true
        }

        KeyCode::Up => {
            match form.focused_field {
                ExpenseField::Payer => form.prev_payer(),
                ExpenseField::SplitAmong => form.split_cursor_up(),
                _ => {}
            }
            true
        }

        KeyCode::Down => {
            match form.focused_field {
                ExpenseField::Payer => form.next_payer(),
                ExpenseField::SplitAmong => form.split_cursor_down(),
                _ => {}
            }
            true
        }

        KeyCode::Char(' ') if form.focused_field == ExpenseField::SplitAmong => {
            form.clear_error();
            form.toggle_split();
            true
        }

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
            true
        }

        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
            true
        }

        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
            true
        }

        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
            true
        }

        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
            true
        }

        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
            true
        }

        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
            true
        }

        _ => false,
    }
}

/// Try to record the expense from the form
fn save_expense(app: &mut App) {
    let expense = match app.expense_form.build_expense() {
        Ok(expense) => expense,
        Err(_) => {
            app.expense_form.set_error(INCOMPLETE_SUBMISSION_MESSAGE);
            return;
        }
    };

    let description = expense.description.clone();
    if app.ledger.add_expense(expense).is_err() {
        // Roster changed underneath the form; reject like any other bad entry.
        app.expense_form.set_error(INCOMPLETE_SUBMISSION_MESSAGE);
        return;
    }

    app.close_dialog();
    app.set_status(format!("Expense '{}' added", description));
}
