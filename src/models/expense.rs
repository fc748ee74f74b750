//! Expense model
//!
//! A single recorded payment: who paid, how much, and who shares the cost.
//! Expenses are validated when constructed and never edited afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::participant::Participant;

/// A recorded shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the expense was for
    pub description: String,

    /// Amount paid, always strictly positive
    pub amount: Money,

    /// Who paid
    pub payer: Participant,

    /// Who shares the cost, in selection order, deduplicated, never empty.
    /// The payer may or may not be among them.
    pub split_among: Vec<Participant>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a validated expense
    ///
    /// The description and payer are trimmed; splitter names are trimmed and
    /// deduplicated keeping first position.
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        payer: impl Into<Participant>,
        split_among: Vec<Participant>,
    ) -> Result<Self, ExpenseValidationError> {
        let description = description.into().trim().to_string();
        let payer = payer.into().trim().to_string();

        let mut split: Vec<Participant> = Vec::with_capacity(split_among.len());
        for name in split_among {
            let name = name.trim().to_string();
            if !name.is_empty() && !split.contains(&name) {
                split.push(name);
            }
        }

        let expense = Self {
            description,
            amount,
            payer,
            split_among: split,
            created_at: Utc::now(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Validate the expense invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if self.payer.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyPayer);
        }
        if self.split_among.is_empty() {
            return Err(ExpenseValidationError::EmptySplit);
        }
        Ok(())
    }

    /// The per-head share of this expense, in currency units
    ///
    /// `split_among` is never empty for a validated expense, so the division
    /// is always defined.
    pub fn share(&self) -> f64 {
        self.amount.to_units() / self.split_among.len() as f64
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} paid by {}, split {} ways)",
            self.description,
            self.amount,
            self.payer,
            self.split_among.len()
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount,
    EmptyPayer,
    EmptySplit,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
            Self::EmptyPayer => write!(f, "Expense payer cannot be empty"),
            Self::EmptySplit => write!(f, "Expense must be split among at least one participant"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            "Dinner",
            Money::from_cents(10000),
            "Alice",
            split(&["Alice", "Bob"]),
        )
        .unwrap();

        assert_eq!(expense.description, "Dinner");
        assert_eq!(expense.amount.cents(), 10000);
        assert_eq!(expense.payer, "Alice");
        assert_eq!(expense.split_among, ["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = Expense::new("  ", Money::from_cents(100), "Alice", split(&["Alice"]))
            .unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptyDescription);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let err =
            Expense::new("Dinner", Money::zero(), "Alice", split(&["Alice"])).unwrap_err();
        assert_eq!(err, ExpenseValidationError::NonPositiveAmount);

        let err = Expense::new(
            "Dinner",
            Money::from_cents(-500),
            "Alice",
            split(&["Alice"]),
        )
        .unwrap_err();
        assert_eq!(err, ExpenseValidationError::NonPositiveAmount);
    }

    #[test]
    fn test_empty_payer_rejected() {
        let err = Expense::new("Dinner", Money::from_cents(100), " ", split(&["Alice"]))
            .unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptyPayer);
    }

    #[test]
    fn test_empty_split_rejected() {
        let err = Expense::new("Dinner", Money::from_cents(100), "Alice", vec![]).unwrap_err();
        assert_eq!(err, ExpenseValidationError::EmptySplit);
    }

    #[test]
    fn test_split_deduplicated() {
        let expense = Expense::new(
            "Dinner",
            Money::from_cents(100),
            "Alice",
            split(&["Bob", "Alice", "Bob"]),
        )
        .unwrap();
        assert_eq!(expense.split_among, ["Bob", "Alice"]);
    }

    #[test]
    fn test_share() {
        let expense = Expense::new(
            "Groceries",
            Money::from_cents(6000),
            "Alice",
            split(&["Alice", "Bob", "Carol"]),
        )
        .unwrap();
        assert_eq!(expense.share(), 20.0);
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(
            "Dinner",
            Money::from_cents(10000),
            "Alice",
            split(&["Alice", "Bob"]),
        )
        .unwrap();

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
