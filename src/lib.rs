//! splitter - Terminal-based shared expense splitting calculator
//!
//! This library provides the core functionality for the splitter: a small
//! group records shared expenses during a session, and the application
//! computes who owes whom and exports a plain-text settlement summary.
//! The expense store is session memory only; settings are the single thing
//! persisted between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, participants, expenses, the ledger)
//! - `services`: Pure computation (balance calculator, summary formatter)
//! - `export`: On-demand text/CSV/JSON exports
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use splitter::models::{Expense, Ledger, Money, Roster};
//! use splitter::services::{compute_balances, format_summary};
//!
//! let mut ledger = Ledger::with_roster(Roster::parse_list("Alice, Bob"));
//! let expense = Expense::new(
//!     "Dinner",
//!     Money::from_cents(10_000),
//!     "Alice",
//!     vec!["Alice".into(), "Bob".into()],
//! )?;
//! ledger.add_expense(expense)?;
//!
//! let summary = format_summary(&compute_balances(&ledger));
//! assert_eq!(summary, "Alice should receive 50.00\nBob owes 50.00\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;

pub use error::SplitterError;
