//! Balance calculator
//!
//! Maps the expense history to each participant's net position. Derived
//! state only: balances are never stored, they are rebuilt from the full
//! history on every call.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::models::{Ledger, Participant};

/// Net position of one participant, in currency units
///
/// Positive means the participant is owed money, negative means they owe.
/// Shares are equal-split floating-point divisions; residue from uneven
/// divisions is left uncorrected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Balance(f64);

/// Classification of a balance for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// Negative balance: the participant owes money
    Owes,
    /// Positive balance: the participant should receive money
    Receives,
    /// Exactly zero
    Settled,
}

impl Balance {
    /// A zero balance
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The signed amount in currency units
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// The magnitude in currency units
    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }

    /// Classify the balance. Settled means exactly zero; floating-point
    /// residue from uneven splits classifies as owing/receiving.
    pub fn status(&self) -> BalanceStatus {
        if self.0 < 0.0 {
            BalanceStatus::Owes
        } else if self.0 > 0.0 {
            BalanceStatus::Receives
        } else {
            BalanceStatus::Settled
        }
    }

    fn credit(&mut self, units: f64) {
        self.0 += units;
    }

    fn debit(&mut self, units: f64) {
        self.0 -= units;
    }
}

// Signed, two decimals, no symbol - the shape the settlement summary uses.
impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// One row of the computed balance mapping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceEntry {
    /// Participant name
    pub participant: Participant,
    /// Net balance
    pub balance: Balance,
}

/// The computed balance mapping, ordered
///
/// Roster members come first in roster order, every one of them present even
/// with no expense involvement. Names that appear only in the expense
/// history (ghosts of a replaced roster) follow in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Balances {
    entries: Vec<BalanceEntry>,
}

impl Balances {
    /// Iterate entries in order
    pub fn iter(&self) -> impl Iterator<Item = &BalanceEntry> {
        self.entries.iter()
    }

    /// The entries in order
    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    /// Look up one participant's balance
    pub fn get(&self, name: &str) -> Option<Balance> {
        self.entries
            .iter()
            .find(|e| e.participant == name)
            .map(|e| e.balance)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all signed balances, in currency units
    ///
    /// Approximately zero whenever every payer is among their splitters; the
    /// residue is floating-point only and is not corrected.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.balance.amount()).sum()
    }
}

/// Compute every participant's net balance from the full expense history
///
/// For each expense, `share = amount / |split_among|`, and only the splitters
/// are touched: the payer, when among them, nets `amount - share`; every
/// other splitter is debited one share. A payer who is the sole splitter
/// therefore nets exactly zero, and a payer outside the split set is not
/// credited at all.
pub fn compute_balances(ledger: &Ledger) -> Balances {
    let mut entries: Vec<BalanceEntry> = ledger
        .roster()
        .iter()
        .map(|name| BalanceEntry {
            participant: name.clone(),
            balance: Balance::zero(),
        })
        .collect();
    let mut index: HashMap<Participant, usize> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.participant.clone(), i))
        .collect();

    let mut entry_at = |entries: &mut Vec<BalanceEntry>, name: &str| -> usize {
        if let Some(&i) = index.get(name) {
            return i;
        }
        entries.push(BalanceEntry {
            participant: name.to_string(),
            balance: Balance::zero(),
        });
        let i = entries.len() - 1;
        index.insert(name.to_string(), i);
        i
    };

    for expense in ledger.expenses() {
        let share = expense.share();

        for name in &expense.split_among {
            let splitter = entry_at(&mut entries, name);
            if *name == expense.payer {
                entries[splitter]
                    .balance
                    .credit(expense.amount.to_units() - share);
            } else {
                entries[splitter].balance.debit(share);
            }
        }
    }

    Balances { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money, Roster};

    const TOLERANCE: f64 = 1e-9;

    fn ledger_with(roster: &str, expenses: &[(&str, i64, &str, &[&str])]) -> Ledger {
        let mut ledger = Ledger::with_roster(Roster::parse_list(roster));
        for (description, cents, payer, split) in expenses {
            let expense = Expense::new(
                *description,
                Money::from_cents(*cents),
                *payer,
                split.iter().map(|n| n.to_string()).collect(),
            )
            .unwrap();
            ledger.add_expense(expense).unwrap();
        }
        ledger
    }

    #[test]
    fn test_two_way_even_split() {
        let ledger = ledger_with(
            "Alice, Bob",
            &[("Dinner", 10000, "Alice", &["Alice", "Bob"])],
        );
        let balances = compute_balances(&ledger);

        assert_eq!(balances.get("Alice").unwrap().amount(), 50.0);
        assert_eq!(balances.get("Bob").unwrap().amount(), -50.0);
        assert_eq!(balances.get("Alice").unwrap().status(), BalanceStatus::Receives);
        assert_eq!(balances.get("Bob").unwrap().status(), BalanceStatus::Owes);
    }

    #[test]
    fn test_two_expense_history() {
        let ledger = ledger_with(
            "Alice, Bob, Carol",
            &[
                ("Groceries", 6000, "Alice", &["Alice", "Bob", "Carol"]),
                ("Taxi", 3000, "Bob", &["Bob", "Carol"]),
            ],
        );
        let balances = compute_balances(&ledger);

        assert!((balances.get("Alice").unwrap().amount() - 40.0).abs() < TOLERANCE);
        assert!((balances.get("Bob").unwrap().amount() - -5.0).abs() < TOLERANCE);
        assert!((balances.get("Carol").unwrap().amount() - -35.0).abs() < TOLERANCE);
        assert!(balances.total().abs() < TOLERANCE);
    }

    #[test]
    fn test_conservation() {
        let ledger = ledger_with(
            "Alice, Bob, Carol, Dave",
            &[
                ("A", 10000, "Alice", &["Alice", "Bob", "Carol"]),
                ("B", 3333, "Bob", &["Alice", "Bob", "Carol", "Dave"]),
                ("C", 99, "Carol", &["Carol", "Dave"]),
                ("D", 1000, "Dave", &["Alice", "Carol", "Dave"]),
            ],
        );
        let balances = compute_balances(&ledger);
        assert!(balances.total().abs() < TOLERANCE);
    }

    #[test]
    fn test_uninvolved_participant_is_exactly_zero() {
        let ledger = ledger_with(
            "Alice, Bob, Carol",
            &[("Dinner", 10000, "Alice", &["Alice", "Bob"])],
        );
        let balances = compute_balances(&ledger);

        assert_eq!(balances.get("Carol").unwrap().amount(), 0.0);
        assert_eq!(balances.get("Carol").unwrap().status(), BalanceStatus::Settled);
    }

    #[test]
    fn test_sole_splitter_payer_nets_zero() {
        let ledger = ledger_with("Alice, Bob", &[("Solo lunch", 1500, "Alice", &["Alice"])]);
        let balances = compute_balances(&ledger);

        assert_eq!(balances.get("Alice").unwrap().amount(), 0.0);
        assert_eq!(balances.get("Alice").unwrap().status(), BalanceStatus::Settled);
        assert_eq!(balances.get("Bob").unwrap().amount(), 0.0);
    }

    #[test]
    fn test_payer_outside_split_is_not_credited() {
        // Only split members are touched; Alice paid but is not among them.
        let ledger = ledger_with("Alice, Bob", &[("Gift", 2000, "Alice", &["Bob"])]);
        let balances = compute_balances(&ledger);

        assert_eq!(balances.get("Alice").unwrap().amount(), 0.0);
        assert_eq!(balances.get("Bob").unwrap().amount(), -20.0);
    }

    #[test]
    fn test_roster_order_preserved() {
        let ledger = ledger_with("Carol, Alice, Bob", &[]);
        let balances = compute_balances(&ledger);

        let names: Vec<&str> = balances.iter().map(|e| e.participant.as_str()).collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_ghost_participants_appended() {
        let mut ledger = ledger_with(
            "Alice, Bob",
            &[("Dinner", 10000, "Alice", &["Alice", "Bob"])],
        );
        ledger.set_roster(Roster::parse_list("Alice, Carol"));

        let balances = compute_balances(&ledger);
        let names: Vec<&str> = balances.iter().map(|e| e.participant.as_str()).collect();
        assert_eq!(names, ["Alice", "Carol", "Bob"]);
        assert_eq!(balances.get("Bob").unwrap().amount(), -50.0);
        assert_eq!(balances.get("Carol").unwrap().amount(), 0.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let ledger = ledger_with(
            "Alice, Bob, Carol",
            &[
                ("A", 6000, "Alice", &["Alice", "Bob", "Carol"]),
                ("B", 3000, "Bob", &["Bob", "Carol"]),
            ],
        );

        let first = compute_balances(&ledger);
        let second = compute_balances(&ledger);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_ledger() {
        let balances = compute_balances(&Ledger::new());
        assert!(balances.is_empty());
        assert_eq!(balances.total(), 0.0);
    }

    #[test]
    fn test_balance_display() {
        let ledger = ledger_with(
            "Alice, Bob",
            &[("Dinner", 10000, "Alice", &["Alice", "Bob"])],
        );
        let balances = compute_balances(&ledger);

        assert_eq!(balances.get("Alice").unwrap().to_string(), "50.00");
        assert_eq!(balances.get("Bob").unwrap().to_string(), "-50.00");
    }
}
