//! Error types for booking-engine operations.

use thiserror::Error;

/// Errors that can occur while reading booking input or rendering a schedule.
///
/// Every structural problem in the input is reported before any scheduling
/// happens. Requests dropped for falling outside office hours or overlapping an
/// earlier booking are not errors.
#[derive(Error, Debug)]
pub enum BookingError {
    /// The input contained no lines at all.
    #[error("input is empty")]
    EmptyInput,

    /// The first line was not `HHMM HHMM`, or did not describe a valid window.
    #[error("office hours error at line {line}: {message}")]
    OfficeHours { line: usize, message: String },

    /// A submission line was not `YYYY-MM-DD HH:MM:SS EMPID`.
    #[error("submission error at line {line}: {message}")]
    Submission { line: usize, message: String },

    /// A meeting line was not `YYYY-MM-DD HH:MM D`.
    #[error("meeting error at line {line}: {message}")]
    Meeting { line: usize, message: String },

    /// A submission line was the last line, with no meeting line after it.
    #[error("submission at line {line} has no meeting line")]
    UnpairedRequest { line: usize },

    /// A numeric field had the right shape but was out of range.
    #[error("invalid {field} at line {line}: '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// The accepted schedule could not be serialized.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, BookingError>;
