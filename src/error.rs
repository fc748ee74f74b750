//! Custom error types for the splitter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The message shown to the user whenever an expense submission is rejected.
///
/// Entry validation collapses every failure (missing description, non-positive
/// amount, missing payer, empty split set) into this single generic message:
/// the submission is dropped whole, with no partial acceptance and no subtype
/// detail at the input surface.
pub const INCOMPLETE_SUBMISSION_MESSAGE: &str = "Please complete all fields.";

/// The main error type for splitter operations
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// An expense submission that failed entry validation
    #[error("Please complete all fields.")]
    IncompleteSubmission,

    /// A name that is not on the current roster
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SplitterError {
    /// Create an "unknown participant" error
    pub fn unknown_participant(name: impl Into<String>) -> Self {
        Self::UnknownParticipant(name.into())
    }

    /// Check if this is a validation error (including rejected submissions)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::IncompleteSubmission | Self::UnknownParticipant(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SplitterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for splitter operations
pub type SplitterResult<T> = Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitterError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_incomplete_submission_message() {
        let err = SplitterError::IncompleteSubmission;
        assert_eq!(err.to_string(), "Please complete all fields.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_participant() {
        let err = SplitterError::unknown_participant("Dave");
        assert_eq!(err.to_string(), "Unknown participant: Dave");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let splitter_err: SplitterError = io_err.into();
        assert!(matches!(splitter_err, SplitterError::Io(_)));
    }
}
