//! Error types for tablegraph operations.
//!
//! Query operations on the graph never fail; these errors come from loading
//! configuration and input, and from the explanation client.

use std::io;
use thiserror::Error;

/// The error type for tablegraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rows could not be read.
    #[error("Input error: {0}")]
    Ingest(#[from] tablegraph_csv::Error),

    /// A question-matching pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The explanation service failed.
    #[error("Explanation error: {0}")]
    Explain(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Explain(e.to_string())
    }
}

/// A specialized Result type for tablegraph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_errors_convert() {
        let inner = tablegraph_csv::Error::InvalidOption("bad delimiter".to_string());
        let err: Error = inner.into();
        assert!(matches!(err, Error::Ingest(_)));
        assert!(err.to_string().contains("bad delimiter"));
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
