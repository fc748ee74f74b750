//! Text export
//!
//! Writes the settlement summary verbatim to `expense_summary.txt`.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{SplitterError, SplitterResult};
use crate::services::balance::Balances;
use crate::services::summary::format_summary;

/// File name of the exported settlement summary
pub const SUMMARY_FILE_NAME: &str = "expense_summary.txt";

/// Write the settlement summary to a writer
pub fn write_summary<W: Write>(balances: &Balances, writer: &mut W) -> SplitterResult<()> {
    writer
        .write_all(format_summary(balances).as_bytes())
        .map_err(|e| SplitterError::Export(e.to_string()))?;
    Ok(())
}

/// Write the settlement summary to `expense_summary.txt` in the given directory
///
/// Returns the path of the written file.
pub fn write_summary_file(dir: &Path, balances: &Balances) -> SplitterResult<PathBuf> {
    let path = dir.join(SUMMARY_FILE_NAME);
    let mut file = std::fs::File::create(&path)
        .map_err(|e| SplitterError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_summary(balances, &mut file)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Ledger, Money, Roster};
    use crate::services::balance::compute_balances;
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
    fn test_write_summary() {
        let balances = compute_balances(&test_ledger());

        let mut out = Vec::new();
        write_summary(&balances, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Alice should receive 50.00\nBob owes 50.00\n"
        );
    }

    #[test]
    fn test_write_summary_file() {
        let temp_dir = TempDir::new().unwrap();
        let balances = compute_balances(&test_ledger());

        let path = write_summary_file(temp_dir.path(), &balances).unwrap();

        assert_eq!(path.file_name().unwrap(), SUMMARY_FILE_NAME);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Alice should receive 50.00\nBob owes 50.00\n");
    }

    #[test]
    fn test_write_summary_file_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let balances = compute_balances(&test_ledger());

        let err = write_summary_file(&missing, &balances).unwrap_err();
        assert!(matches!(err, SplitterError::Export(_)));
    }
}
