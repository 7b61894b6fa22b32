//! Row ingestion for tablegraph.
//!
//! Reads delimited text files (semicolon-separated exports by default) into
//! plain rows of strings. Legacy single-byte encodings are decoded up front,
//! cells are trimmed, and records the parser rejects are skipped with a
//! [`Warning`] instead of aborting the whole load.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod encoding;
pub mod error;
pub mod reader;
pub mod warning;

pub use encoding::Encoding;
pub use error::{Error, Result};
pub use reader::{ReaderOptions, RowReader, Rows};
pub use warning::Warning;
