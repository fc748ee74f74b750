//! Export module for the splitter
//!
//! On-demand exports of the current session in three formats:
//! - Text: the settlement summary, the downloadable artifact proper
//! - CSV: the raw expense table (spreadsheet-compatible)
//! - JSON: machine-readable session snapshot with schema versioning
//!
//! Exports are write-only; nothing is ever read back into a session.

pub mod csv;
pub mod json;
pub mod text;

pub use csv::{write_expenses_csv, write_expenses_csv_file, EXPENSES_CSV_FILE_NAME};
pub use json::{
    write_session_json, write_session_json_file, SessionExport, EXPORT_SCHEMA_VERSION,
    SESSION_JSON_FILE_NAME,
};
pub use text::{write_summary, write_summary_file, SUMMARY_FILE_NAME};
