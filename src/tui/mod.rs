//! Terminal User Interface module
//!
//! The interactive surface of the splitter, built on ratatui: a sidebar with
//! the roster and per-participant balances, main views for the expense table,
//! the balance table and the settlement summary, and modal dialogs for data
//! entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
