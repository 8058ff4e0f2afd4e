//! Error types for the data-loader crate.
//!
//! Row-level variants (`ParseError`, `InvalidValue`) are produced for single
//! CSV rows. The parser logs them and skips the row, so only file-level
//! failures ever reach the caller of `Catalog::load_from_files`.

use thiserror::Error;

/// Errors that can occur during data loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader itself failed (bad UTF-8, broken quoting, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row in a data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
