//! Error types for the data-loader crate.
//!
//! Every failure while reading the three input tables surfaces as a
//! `DataLoadError`. Nothing is recovered locally: a table either loads
//! completely or the caller gets the first error encountered.

use thiserror::Error;

/// Errors that can occur while loading and validating the input tables
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (malformed quoting, bad UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Line in data file couldn't be parsed
    ///
    /// Line numbers are 1-based and count the header row.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A column the core depends on is absent from the table header
    #[error("Missing column '{column}' in {table} table")]
    MissingColumn { table: String, column: String },

    /// A key that must be unique (title, critic identifier) appeared twice
    #[error("Duplicate {table} key: {key}")]
    DuplicateKey { table: String, key: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
