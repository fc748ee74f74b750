//! Participants and the session roster
//!
//! A participant is identified by their name alone; there is no separate ID.
//! The roster is the set of currently known participants, in the order they
//! were entered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named party in the expense-sharing group. Identity is the string itself.
pub type Participant = String;

/// The active participant set, in entry order, deduplicated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<Participant>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a roster from already-separated names
    ///
    /// Names are trimmed; empties are dropped; duplicates keep their first
    /// position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.push(name.as_ref());
        }
        roster
    }

    /// Parse a roster from a comma-separated list, e.g. "Alice, Bob, Carol"
    pub fn parse_list(input: &str) -> Self {
        Self::from_names(input.split(','))
    }

    fn push(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    /// Check whether a name is on the roster
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterate names in entry order
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.names.iter()
    }

    /// The names in entry order
    pub fn names(&self) -> &[Participant] {
        &self.names
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the roster is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// "Alice, Bob, Carol" - the same shape the roster is entered in
impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
