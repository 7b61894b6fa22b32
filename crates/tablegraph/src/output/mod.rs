//! Output formatting for query results.
//!
//! Results are rendered as vertical lists: a title, one bulleted entry per
//! line and a total. Every writer takes a generic [`Write`] so the interactive
//! session and tests can capture output. `--json` bypasses all of this and
//! prints the serialized [`Lookup`] instead.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use crate::domain::{Lookup, Overview, QueryKind, UnknownName};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, info};

use color::{accent, bold, bullet, dimmed, unknown_icon};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 100;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `TABLEGRAPH_MAX_WIDTH`: Maximum content width (default: 100)
    /// - `TABLEGRAPH_ASCII`: Set to "1" or "true" for ASCII-only icons
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `TABLEGRAPH_COLOR`: Set to "0" or "false" to disable colors
    pub fn from_env() -> Self {
        let max_width = match env::var("TABLEGRAPH_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => s.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    env_var = "TABLEGRAPH_MAX_WIDTH",
                    value = %s,
                    default = DEFAULT_MAX_CONTENT_WIDTH,
                    "Invalid value, using default"
                );
                DEFAULT_MAX_CONTENT_WIDTH
            }),
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = env::var("TABLEGRAPH_ASCII")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // Respect NO_COLOR (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("TABLEGRAPH_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Width available for wrapped text: the terminal width capped at
    /// `max_width`.
    pub fn wrap_width(&self) -> usize {
        let terminal = terminal_size::terminal_size()
            .map_or(usize::from(DEFAULT_TERMINAL_WIDTH), |(w, _)| usize::from(w.0));
        terminal.min(self.max_width).max(20)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Writers
// ============================================================================

/// Title of a list query result.
pub fn list_title(kind: QueryKind, name: &str) -> String {
    match kind {
        QueryKind::Direct => format!("Direct dependencies of '{name}'"),
        QueryKind::Indirect => format!("Indirect dependencies of '{name}'"),
        QueryKind::Users => format!("Users of '{name}'"),
        QueryKind::Overview => format!("Full analysis for '{name}'"),
    }
}

/// Write a titled vertical list with its total.
pub fn write_section<W: Write>(
    w: &mut W,
    title: &str,
    items: &[String],
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}:", bold(title, config))?;
    if items.is_empty() {
        writeln!(w, "  {}", dimmed("No items found", config))?;
        return Ok(());
    }
    for item in items {
        writeln!(w, "  {} {item}", bullet(config))?;
    }
    writeln!(w)?;
    writeln!(
        w,
        "  {}",
        dimmed(&format!("Total: {} items", items.len()), config)
    )
}

/// Write the miss message and the suggestions, if any.
pub fn write_unknown<W: Write>(
    w: &mut W,
    unknown: &UnknownName,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "{} '{}' does not exist.",
        unknown_icon(config),
        error(&unknown.name, config)
    )?;
    if !unknown.suggestions.is_empty() {
        write_section(w, "Similar names", &unknown.suggestions, config)?;
    }
    Ok(())
}

/// Write the result of a direct, indirect or users query.
pub fn write_list_lookup<W: Write>(
    w: &mut W,
    kind: QueryKind,
    name: &str,
    lookup: &Lookup<Vec<String>>,
    config: &OutputConfig,
) -> io::Result<()> {
    match lookup {
        Lookup::Found(items) => {
            write_section(w, &list_title(kind, &info(name, config)), items, config)
        }
        Lookup::Unknown(unknown) => write_unknown(w, unknown, config),
    }
}

/// Write the result of an overview query.
pub fn write_overview_lookup<W: Write>(
    w: &mut W,
    lookup: &Lookup<Overview>,
    config: &OutputConfig,
) -> io::Result<()> {
    match lookup {
        Lookup::Found(overview) => {
            writeln!(w)?;
            writeln!(
                w,
                "{}:",
                bold(
                    &list_title(QueryKind::Overview, &info(&overview.name, config)),
                    config
                )
            )?;
            write_section(w, "Direct dependencies", &overview.dependencies, config)?;
            write_section(w, "Direct users", &overview.users, config)
        }
        Lookup::Unknown(unknown) => write_unknown(w, unknown, config),
    }
}

/// Write an explanation, wrapped to the terminal.
pub fn write_explanation<W: Write>(w: &mut W, text: &str, config: &OutputConfig) -> io::Result<()> {
    write_wrapped(w, text, config.wrap_width(), config)
}

fn write_wrapped<W: Write>(
    w: &mut W,
    text: &str,
    width: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", bold("Explanation:", config))?;
    for line in wrap_text(text, width.saturating_sub(2)) {
        writeln!(w, "  {}", accent(&line, config))?;
    }
    Ok(())
}

/// Print a serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

/// Write a serializable value as pretty JSON.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, max_width)
                    .into_iter()
                    .map(std::borrow::Cow::into_owned)
                    .collect()
            }
        })
        .collect()
}
