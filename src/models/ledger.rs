//! The session ledger
//!
//! Holds the roster and the ordered expense history for one session. The
//! ledger is an owned value threaded through the application explicitly;
//! nothing here touches disk, and the whole thing is dropped when the
//! session ends.

use serde::{Deserialize, Serialize};

use crate::error::{SplitterError, SplitterResult};

use super::expense::Expense;
use super::money::Money;
use super::participant::Roster;

/// In-memory store for one session: the roster plus every recorded expense
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    roster: Roster,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with an initial roster
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            expenses: Vec::new(),
        }
    }

    /// The current roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Replace the roster
    ///
    /// Existing expenses are untouched: names they reference that are no
    /// longer on the roster remain in the history and keep appearing in
    /// balances as ghost participants.
    pub fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
    }

    /// The recorded expenses, oldest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Record a validated expense
    ///
    /// Beyond the expense's own invariants this checks, at entry time only,
    /// that the payer and every splitter are on the current roster. Nothing
    /// re-checks the stored history when the roster later changes.
    pub fn add_expense(&mut self, expense: Expense) -> SplitterResult<()> {
        expense
            .validate()
            .map_err(|e| SplitterError::Validation(e.to_string()))?;

        if !self.roster.contains(&expense.payer) {
            return Err(SplitterError::unknown_participant(&expense.payer));
        }
        for name in &expense.split_among {
            if !self.roster.contains(name) {
                return Err(SplitterError::unknown_participant(name));
            }
        }

        self.expenses.push(expense);
        Ok(())
    }

    /// Number of recorded expenses
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Check if no expenses have been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitterError;

    fn test_expense(payer: &str, split: &[&str], cents: i64) -> Expense {
        Expense::new(
            "Test",
            Money::from_cents(cents),
            payer,
            split.iter().map(|n| n.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_add_expense() {
        let mut ledger = Ledger::with_roster(Roster::parse_list("Alice, Bob"));
        ledger
            .add_expense(test_expense("Alice", &["Alice", "Bob"], 10000))
            .unwrap();

        assert_eq!(ledger.expense_count(), 1);
        assert_eq!(ledger.total_spent(), Money::from_cents(10000));
    }

    #[test]
    fn test_unknown_payer_rejected() {
        let mut ledger = Ledger::with_roster(Roster::parse_list("Alice"));
        let err = ledger
            .add_expense(test_expense("Dave", &["Alice"], 100))
            .unwrap_err();
        assert!(matches!(err, SplitterError::UnknownParticipant(name) if name == "Dave"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_splitter_rejected() {
        let mut ledger = Ledger::with_roster(Roster::parse_list("Alice"));
        let err = ledger
            .add_expense(test_expense("Alice", &["Alice", "Eve"], 100))
            .unwrap_err();
        assert!(matches!(err, SplitterError::UnknownParticipant(name) if name == "Eve"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ledger = Ledger::with_roster(Roster::parse_list("Alice, Bob"));
        for cents in [100, 200, 300] {
            ledger
                .add_expense(test_expense("Alice", &["Bob"], cents))
                .unwrap();
        }

        let amounts: Vec<i64> = ledger.expenses().iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, [100, 200, 300]);
    }

    #[test]
    fn test_roster_replacement_keeps_expenses() {
        let mut ledger = Ledger::with_roster(Roster::parse_list("Alice, Bob"));
        ledger
            .add_expense(test_expense("Alice", &["Alice", "Bob"], 5000))
            .unwrap();

        ledger.set_roster(Roster::parse_list("Alice, Carol"));

        // History is untouched; Bob lives on inside it.
        assert_eq!(ledger.expense_count(), 1);
        assert_eq!(ledger.expenses()[0].split_among, ["Alice", "Bob"]);
        assert!(!ledger.roster().contains("Bob"));
    }

    #[test]
    fn test_total_spent_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_spent(), Money::zero());
    }
}
