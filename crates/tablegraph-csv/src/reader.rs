//! Delimited-text reading.
//!
//! [`RowReader`] turns the bytes of a delimited file into [`Rows`]: the data
//! records as owned strings, the header line (if any), and the warnings
//! raised for records that had to be skipped.
//!
//! Rows are allowed to have different lengths. Each row is an unordered list
//! of related names for the caller, so ragged exports are normal input.

use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::warning::Warning;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

/// Default field delimiter: semicolon, as written by European spreadsheet
/// locales.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Options controlling how input is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Encoding of the raw input bytes.
    pub encoding: Encoding,
    /// Whether the first record is a header line rather than data.
    pub has_headers: bool,
    /// Whether leading and trailing whitespace is stripped from every cell.
    pub trim: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            encoding: Encoding::default(),
            has_headers: true,
            trim: true,
        }
    }
}

impl ReaderOptions {
    /// Check that the options can be handed to the CSV parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the delimiter is a quote, a line
    /// terminator, or not ASCII.
    pub fn validate(&self) -> Result<()> {
        match self.delimiter {
            b'"' | b'\n' | b'\r' => Err(Error::InvalidOption(format!(
                "Delimiter {:?} conflicts with CSV quoting or line endings",
                char::from(self.delimiter)
            ))),
            d if !d.is_ascii() => Err(Error::InvalidOption(
                "Delimiter must be a single ASCII character".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Result of reading one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rows {
    /// Data records, in file order.
    pub rows: Vec<Vec<String>>,
    /// Header names, when the input was read with headers.
    pub headers: Option<Vec<String>>,
    /// Records that were skipped, with the reason.
    pub warnings: Vec<Warning>,
}

impl Rows {
    /// Number of data rows kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no data rows were kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reader for delimited text.
///
/// # Examples
///
/// ```
/// use tablegraph_csv::{ReaderOptions, RowReader};
///
/// let reader = RowReader::new(ReaderOptions {
///     has_headers: false,
///     ..ReaderOptions::default()
/// });
/// let rows = reader.read_rows(b"SCHEMA.A; SCHEMA.B\nSCHEMA.B;SCHEMA.C\n").unwrap();
/// assert_eq!(rows.rows[0], vec!["SCHEMA.A", "SCHEMA.B"]);
/// assert_eq!(rows.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowReader {
    options: ReaderOptions,
}

impl RowReader {
    /// Create a reader with the given options.
    #[must_use]
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// The options this reader was created with.
    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Read rows from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the options are
    /// invalid. Individual bad records become warnings instead.
    pub async fn read_path(&self, path: &Path) -> Result<Rows> {
        tracing::debug!(path = %path.display(), "Reading rows");
        let bytes = tokio::fs::read(path).await?;
        self.read_rows(&bytes)
    }

    /// Read rows from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or the header line
    /// cannot be parsed.
    pub fn read_rows(&self, bytes: &[u8]) -> Result<Rows> {
        self.options.validate()?;

        let text = self.options.encoding.decode(bytes);
        let mut reader = ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_headers)
            .flexible(true)
            .trim(if self.options.trim {
                Trim::All
            } else {
                Trim::None
            })
            .from_reader(text.as_bytes());

        let headers = if self.options.has_headers {
            Some(reader.headers()?.iter().map(str::to_string).collect())
        } else {
            None
        };

        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for result in reader.records() {
            match result {
                Ok(record) => {
                    if record.iter().all(|cell| cell.trim().is_empty()) {
                        let warning = Warning::SkippedRow {
                            line_number: record_line(&record),
                            reason: "all cells are blank".to_string(),
                        };
                        tracing::debug!(%warning, "Skipping record");
                        warnings.push(warning);
                        continue;
                    }
                    rows.push(record.iter().map(str::to_string).collect());
                }
                Err(e) => {
                    let warning = Warning::MalformedRecord {
                        line_number: e.position().map_or(0, csv::Position::line),
                        error: e.to_string(),
                    };
                    tracing::warn!(%warning, "Skipping record");
                    warnings.push(warning);
                }
            }
        }

        tracing::debug!(
            rows = rows.len(),
            warnings = warnings.len(),
            encoding = %self.options.encoding,
            "Finished reading rows"
        );

        Ok(Rows {
            rows,
            headers,
            warnings,
        })
    }
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}
