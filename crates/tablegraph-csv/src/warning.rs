//! Warning types for non-fatal problems during row ingestion.
//!
//! A single bad record should not make the whole input unusable. The reader
//! skips such records and reports each one as a [`Warning`] so callers can
//! surface them (typically through `tracing`) and continue.
//!
//! # Examples
//!
//! ```
//! use tablegraph_csv::warning::Warning;
//!
//! let warning = Warning::SkippedRow {
//!     line_number: 7,
//!     reason: "all cells are blank".to_string(),
//! };
//! assert_eq!(warning.line_number(), 7);
//! assert_eq!(warning.kind(), "skipped_row");
//! ```

/// A non-fatal warning raised while reading rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The CSV parser rejected a record; it was skipped.
    MalformedRecord {
        /// The 1-based line number where the record started.
        line_number: u64,
        /// Parser error message.
        error: String,
    },

    /// A record parsed correctly but carried nothing usable.
    SkippedRow {
        /// The 1-based line number of the record.
        line_number: u64,
        /// Why the record was skipped.
        reason: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        match self {
            Self::MalformedRecord { line_number, .. } | Self::SkippedRow { line_number, .. } => {
                *line_number
            }
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// ```
    /// use tablegraph_csv::warning::Warning;
    ///
    /// let warning = Warning::MalformedRecord {
    ///     line_number: 3,
    ///     error: "unterminated quote".to_string(),
    /// };
    /// assert_eq!(warning.description(), "line 3: malformed record: unterminated quote");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedRecord { line_number, error } => {
                format!("line {line_number}: malformed record: {error}")
            }
            Self::SkippedRow {
                line_number,
                reason,
            } => format!("line {line_number}: skipped: {reason}"),
        }
    }

    /// Returns a static string identifying the warning kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "malformed_record",
            Self::SkippedRow { .. } => "skipped_row",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}
