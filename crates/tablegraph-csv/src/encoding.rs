//! Text encodings accepted for input files.
//!
//! Spreadsheet exports from older tooling are frequently written in
//! ISO-8859-1 rather than UTF-8, so the reader decodes raw bytes itself
//! before handing text to the CSV parser.

use crate::error::Error;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Character encoding of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8. Invalid sequences are replaced with U+FFFD.
    Utf8,
    /// ISO-8859-1, decoded with the windows-1252 superset as browsers do.
    #[default]
    Latin1,
}

impl Encoding {
    /// Decode raw bytes into text.
    ///
    /// A leading byte order mark takes precedence over the configured
    /// encoding and is stripped from the output. Decoding never fails:
    /// malformed sequences become replacement characters and are logged.
    #[must_use]
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        let codec = match self {
            Self::Utf8 => encoding_rs::UTF_8,
            Self::Latin1 => encoding_rs::WINDOWS_1252,
        };

        let (text, used, had_errors) = codec.decode(bytes);
        if had_errors {
            tracing::warn!(
                encoding = used.name(),
                "Input contained malformed sequences; replaced with U+FFFD"
            );
        }
        text
    }

    /// Canonical label for this encoding.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin1",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" | "windows-1252" | "cp1252" => {
                Ok(Self::Latin1)
            }
            other => Err(Error::InvalidOption(format!(
                "Unsupported encoding '{other}' (expected utf-8 or latin1)"
            ))),
        }
    }
}
