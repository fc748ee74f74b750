//! Core data models for the splitter
//!
//! This module contains the data structures that represent the expense-sharing
//! domain: money amounts, participants, expenses, and the session ledger.

pub mod expense;
pub mod ledger;
pub mod money;
pub mod participant;

pub use expense::{Expense, ExpenseValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use participant::{Participant, Roster};
