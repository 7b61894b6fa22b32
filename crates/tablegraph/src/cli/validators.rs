//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use crate::config::parse_delimiter;
use std::str::FromStr;
use tablegraph_csv::Encoding;

/// Validate a table name given on the command line.
///
/// Surrounding whitespace is trimmed like cells of the export. Inner
/// spaces are kept since exported names may contain them.
pub fn validate_name(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    Ok(s.to_string())
}

/// Validate a field delimiter: one ASCII character, or `tab`.
pub fn validate_delimiter(s: &str) -> Result<String, String> {
    parse_delimiter(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Validate an input encoding label.
pub fn validate_encoding(s: &str) -> Result<String, String> {
    let encoding = Encoding::from_str(s).map_err(|e| e.to_string())?;
    Ok(encoding.label().to_string())
}
