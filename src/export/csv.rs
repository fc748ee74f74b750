//! CSV export functionality
//!
//! Exports the raw expense table to CSV format.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{SplitterError, SplitterResult};
use crate::models::Ledger;

/// File name of the exported expense table
pub const EXPENSES_CSV_FILE_NAME: &str = "expenses.csv";

/// Export all recorded expenses to CSV
pub fn write_expenses_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> SplitterResult<()> {
    // Write header
    writeln!(writer, "Description,Amount,Paid By,Split Among,Added")
        .map_err(|e| SplitterError::Export(e.to_string()))?;

    for expense in ledger.expenses() {
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape_csv(&expense.description),
            expense.amount,
            escape_csv(&expense.payer),
            escape_csv(&expense.split_among.join("; ")),
            expense.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
        .map_err(|e| SplitterError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Write the expense table to `expenses.csv` in the given directory
///
/// Returns the path of the written file.
pub fn write_expenses_csv_file(dir: &Path, ledger: &Ledger) -> SplitterResult<PathBuf> {
    let path = dir.join(EXPENSES_CSV_FILE_NAME);
    let mut file = std::fs::File::create(&path)
        .map_err(|e| SplitterError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_expenses_csv(ledger, &mut file)?;
    Ok(path)
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
