//! JSON export functionality
//!
//! Exports a snapshot of the session to JSON with schema versioning: the
//! roster, every recorded expense, and the computed balances.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{SplitterError, SplitterResult};
use crate::models::{Expense, Ledger, Participant};
use crate::services::balance::{compute_balances, BalanceEntry};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// File name of the exported session snapshot
pub const SESSION_JSON_FILE_NAME: &str = "session.json";

/// Snapshot of one session for export
#[derive(Debug, Clone, Serialize)]
pub struct SessionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The roster at export time
    pub participants: Vec<Participant>,

    /// Every recorded expense, oldest first
    pub expenses: Vec<Expense>,

    /// Balances computed at export time
    pub balances: Vec<BalanceEntry>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    /// Number of participants on the roster
    pub participant_count: usize,

    /// Number of recorded expenses
    pub expense_count: usize,

    /// Sum of all expense amounts, two decimals
    pub total_spent: String,
}

impl SessionExport {
    /// Create a session export from the ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let balances = compute_balances(ledger);

        let metadata = ExportMetadata {
            participant_count: ledger.roster().len(),
            expense_count: ledger.expense_count(),
            total_spent: ledger.total_spent().to_string(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            participants: ledger.roster().names().to_vec(),
            expenses: ledger.expenses().to_vec(),
            balances: balances.entries().to_vec(),
            metadata,
        }
    }
}

/// Export the session snapshot to JSON
pub fn write_session_json<W: Write>(ledger: &Ledger, writer: &mut W) -> SplitterResult<()> {
    let export = SessionExport::from_ledger(ledger);

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| SplitterError::Export(e.to_string()))?;

    Ok(())
}

/// Write the session snapshot to `session.json` in the given directory
///
/// Returns the path of the written file.
pub fn write_session_json_file(dir: &Path, ledger: &Ledger) -> SplitterResult<PathBuf> {
    let path = dir.join(SESSION_JSON_FILE_NAME);
    let mut file = std::fs::File::create(&path)
        .map_err(|e| SplitterError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_session_json(ledger, &mut file)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Roster};
    use tempfile::TempDir;

    fn test_ledger() -> Ledger {
        let mut ledger = Ledger::with_roster(Roster::parse_list("Alice, Bob"));
        ledger
            .add_expense(
                Expense::new(
                    "Dinner",
                    Money::from_cents(10000),
                    "Alice",
                    vec!["Alice".to_string(), "Bob".to_string()],
                )
                .unwrap(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_session_export() {
        let export = SessionExport::from_ledger(&test_ledger());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.participants, ["Alice", "Bob"]);
        assert_eq!(export.expenses.len(), 1);
        assert_eq!(export.balances.len(), 2);
        assert_eq!(export.metadata.participant_count, 2);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.total_spent, "100.00");
    }

    #[test]
    fn test_json_shape() {
        let mut out = Vec::new();
        write_session_json(&test_ledger(), &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(json["participants"][0], "Alice");
        assert_eq!(json["expenses"][0]["description"], "Dinner");
        assert_eq!(json["balances"][0]["participant"], "Alice");
        assert_eq!(json["balances"][0]["balance"], 50.0);
        assert_eq!(json["metadata"]["expense_count"], 1);
    }

    #[test]
    fn test_write_session_json_file() {
        let temp_dir = TempDir::new().unwrap();

        let path = write_session_json_file(temp_dir.path(), &test_ledger()).unwrap();

        assert_eq!(path.file_name().unwrap(), SESSION_JSON_FILE_NAME);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("schema_version"));
    }
}
