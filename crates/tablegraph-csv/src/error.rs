//! Error types for tablegraph-csv operations.

use std::io;
use thiserror::Error;

/// The error type for tablegraph-csv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV parser failed in a way that prevents further reading.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A reader option was rejected before parsing started.
    #[error("Invalid reader option: {0}")]
    InvalidOption(String),
}

/// A specialized Result type for tablegraph-csv operations.
pub type Result<T> = std::result::Result<T, Error>;
