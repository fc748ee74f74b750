//! Participants dialog
//!
//! Single-field dialog for entering the roster as a comma-separated list.
//! Submitting replaces the roster; recorded expenses are never touched, so
//! names removed here live on in the history as ghost participants.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Roster;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the participants form dialog
#[derive(Debug, Clone, Default)]
pub struct ParticipantsFormState {
    /// Comma-separated names input
    pub input: TextInput,
}

impl ParticipantsFormState {
    /// Create an empty form state
    pub fn new() -> Self {
        Self {
            input: TextInput::new().placeholder("E.g., Alice, Bob, Charlie"),
        }
    }

    /// Create a form pre-filled with the current roster
    pub fn for_roster(roster: &Roster) -> Self {
        let mut form = Self::new();
        form.input = form.input.content(roster.to_string());
        form
    }

    /// Parse the entered roster
    pub fn build_roster(&self) -> Roster {
        Roster::parse_list(self.input.value())
    }
}

/// Render the participants dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(60, 8, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Participants ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let input = &app.participants_form.input;
    let display_value = if input.value().is_empty() {
        input.placeholder.clone()
    } else {
        input.value().to_string()
    };

    let cursor_pos = input.cursor.min(display_value.len());
    let (before, after) = display_value.split_at(cursor_pos);
    let cursor_char = after.chars().next().unwrap_or(' ');

    let mut value_spans = vec![
        Span::styled("Names: ", Style::default().fg(Color::Cyan)),
        Span::styled(before.to_string(), Style::default().fg(Color::White)),
        Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
    ];
    if after.len() > cursor_char.len_utf8() {
        value_spans.push(Span::styled(
            after[cursor_char.len_utf8()..].to_string(),
            Style::default().fg(Color::White),
        ));
    }

    let lines = vec![
        Line::from("Enter participant names, separated by commas."),
        Line::from("Recorded expenses keep the names they were entered with."),
        Line::from(""),
        Line::from(value_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Apply  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Handle key input for the participants dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            let roster = app.participants_form.build_roster();
            let count = roster.len();
            app.ledger.set_roster(roster);
            app.clamp_selections();
            app.close_dialog();
            app.set_status(format!(
                "Roster updated ({} participant{})",
                count,
                if count == 1 { "" } else { "s" }
            ));
            true
        }

        KeyCode::Backspace => {
            app.participants_form.input.backspace();
            true
        }

        KeyCode::Delete => {
            app.participants_form.input.delete();
            true
        }

        KeyCode::Left => {
            app.participants_form.input.move_left();
            true
        }

        KeyCode::Right => {
            app.participants_form.input.move_right();
            true
        }

        KeyCode::Home => {
            app.participants_form.input.move_start();
            true
        }

        KeyCode::End => {
            app.participants_form.input.move_end();
            true
        }

        KeyCode::Char(c) => {
            app.participants_form.input.insert(c);
            true
        }

        _ => false,
    }
}
