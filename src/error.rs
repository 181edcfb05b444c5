//! Error types for the attendance audit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! ingesting attendance rows and normalizing their fields.

use thiserror::Error;

/// The main error type for the attendance audit engine.
///
/// Row-level variants ([`AuditError::RowParseError`], [`AuditError::InvalidDateTime`],
/// [`AuditError::InvalidDuration`]) are isolated by the ingestion layer and never
/// abort an analysis. Structural variants ([`AuditError::MissingColumn`],
/// [`AuditError::FileReadError`] and the configuration errors) are decided once,
/// before any rule runs.
///
/// # Example
///
/// ```
/// use attendance_audit::error::AuditError;
///
/// let error = AuditError::MissingColumn {
///     column: "Employee Name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required column not found: Employee Name");
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the rules cannot work with.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the offending setting.
        message: String,
    },

    /// The attendance source could not be opened or read.
    #[error("Failed to read attendance file '{path}': {message}")]
    FileReadError {
        /// The path of the source.
        path: String,
        /// The underlying I/O or CSV error.
        message: String,
    },

    /// A single attendance row could not be turned into fields.
    #[error("Malformed attendance row {row}: {message}")]
    RowParseError {
        /// The 1-based data row number.
        row: usize,
        /// A description of the problem.
        message: String,
    },

    /// A date-time field could not be normalized into an instant.
    #[error("Invalid date-time value: '{value}'")]
    InvalidDateTime {
        /// The raw field text.
        value: String,
    },

    /// An hours-worked field could not be parsed.
    #[error("Invalid shift duration value: '{value}'")]
    InvalidDuration {
        /// The raw field text.
        value: String,
    },

    /// A required header is absent from the attendance source.
    #[error("Required column not found: {column}")]
    MissingColumn {
        /// The header name that was looked up.
        column: String,
    },
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
