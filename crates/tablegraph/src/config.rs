//! Configuration management for tablegraph.
//!
//! Settings come from a YAML file (`tablegraph.yaml` in the working
//! directory, or the path given with `--config`) and are then overridden by
//! command-line flags. A missing default file is not an error; every field
//! has a default.
//!
//! ```yaml
//! input:
//!   path: deps.csv
//!   delimiter: ";"
//!   encoding: latin1
//!   has-headers: true
//! explain:
//!   enabled: true
//!   base-url: http://localhost:11434/v1
//!   model: mistral
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tablegraph_csv::{Encoding, ReaderOptions};
use tokio::fs;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "tablegraph.yaml";

/// Default endpoint of a local OpenAI-compatible server (Ollama)
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "mistral";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input file settings
    pub input: InputConfig,

    /// Explanation service settings
    pub explain: ExplainConfig,
}

/// Input file section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InputConfig {
    /// Path to the delimited file listing related names per row
    pub path: Option<PathBuf>,

    /// Single-character field delimiter
    pub delimiter: String,

    /// Encoding label (`utf-8` or `latin1`)
    pub encoding: String,

    /// Whether the first line is a header
    pub has_headers: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: ";".to_string(),
            encoding: Encoding::default().label().to_string(),
            has_headers: true,
        }
    }
}

impl InputConfig {
    /// Reader options for this section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the delimiter or encoding is invalid.
    pub fn reader_options(&self) -> Result<ReaderOptions> {
        let delimiter = parse_delimiter(&self.delimiter)?;
        let encoding: Encoding = self
            .encoding
            .parse()
            .map_err(|e: tablegraph_csv::Error| Error::Config(e.to_string()))?;

        let options = ReaderOptions {
            delimiter,
            encoding,
            has_headers: self.has_headers,
            trim: true,
        };
        options
            .validate()
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(options)
    }
}

/// Explanation service section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExplainConfig {
    /// Ask the language model to explain query results
    pub enabled: bool,

    /// Base URL of the OpenAI-compatible API
    pub base_url: String,

    /// Model name
    pub model: String,

    /// Bearer token; local servers accept any value
    pub api_key: String,

    /// Sampling temperature; kept low for factual answers
    pub temperature: f32,

    /// Maximum tokens in a reply
    pub max_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: "ollama".to_string(),
            temperature: 0.3,
            max_tokens: 500,
            timeout_secs: 60,
        }
    }
}

/// Values supplied on the command line, applied over the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Input path
    pub input: Option<PathBuf>,
    /// Field delimiter
    pub delimiter: Option<String>,
    /// Encoding label
    pub encoding: Option<String>,
    /// Treat the first line as data
    pub no_headers: bool,
    /// Disable explanations
    pub no_explain: bool,
    /// Chat model
    pub model: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load the explicit file if given, else `tablegraph.yaml` in
    /// `working_dir` if it exists, else defaults.
    pub async fn load_or_default(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if fs::try_exists(&candidate).await? {
            Self::load(&candidate).await
        } else {
            tracing::debug!("No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Apply command-line values over the loaded ones.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(path) = &overrides.input {
            self.input.path = Some(path.clone());
        }
        if let Some(delimiter) = &overrides.delimiter {
            self.input.delimiter.clone_from(delimiter);
        }
        if let Some(encoding) = &overrides.encoding {
            self.input.encoding.clone_from(encoding);
        }
        if overrides.no_headers {
            self.input.has_headers = false;
        }
        if overrides.no_explain {
            self.explain.enabled = false;
        }
        if let Some(model) = &overrides.model {
            self.explain.model.clone_from(model);
        }
    }

    /// Check every field that can be wrong before any work starts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.input.reader_options()?;

        if !(0.0..=2.0).contains(&self.explain.temperature) {
            return Err(Error::Config(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.explain.temperature
            )));
        }
        if self.explain.enabled && self.explain.base_url.trim().is_empty() {
            return Err(Error::Config(
                "Explanations are enabled but base-url is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The input path, which must be set by now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if neither the file nor `--input` set it.
    pub fn input_path(&self) -> Result<&Path> {
        self.input.path.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "No input file: pass --input or set input.path in {CONFIG_FILE_NAME}"
            ))
        })
    }
}

/// Parse a delimiter given as one ASCII character, or `tab` / `\t`.
///
/// # Errors
///
/// Returns [`Error::Config`] for empty, multi-character or non-ASCII input.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    if s == "\\t" || s.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(Error::Config(format!(
            "Delimiter must be a single ASCII character, got '{s}'"
        ))),
    }
}
