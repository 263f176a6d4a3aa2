//! Error types for itemgen-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in itemgen-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the generated file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate (includes invalid UTF-8)
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A numeric column held something that is not a number
    #[error("row {row}: invalid {column} value '{value}': {reason}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    /// Configuration is internally inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown target category name
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
