//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for tablegraph using
//! clap's derive API.
//!
//! # Commands
//!
//! - `ask`: Ask questions in plain language (default)
//! - `deps`: List the dependencies of a table
//! - `users`: List the tables that use a table
//! - `show`: Show both directions around a table
//! - `suggest`: List names similar to a possibly misspelled one
//! - `info`: Show what was loaded
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`, `--input`, `--delimiter`, `--encoding`, `--no-headers`:
//!   where and how to read the dependency export
//! - `--no-explain`, `--model`: control language-model explanations
//!
//! # Example
//!
//! ```bash
//! tablegraph --input deps.csv deps SALES.ORDERS --indirect
//! tablegraph --input deps.csv users ref.clients
//! tablegraph --input deps.csv ask "qui utilise REF.CLIENTS ?"
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{AskArgs, DepsArgs, InfoArgs, NameArgs};

// Re-export validators for external use
pub use validators::{validate_delimiter, validate_encoding, validate_name};

/// Tablegraph - ask which tables depend on which
///
/// Reads a delimited export where each row lists related tables, the first
/// depending on those after it, and answers dependency questions about it.
#[derive(Parser, Debug)]
#[command(name = "tablegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ./tablegraph.yaml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dependency export to read
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Field delimiter: one ASCII character, or `tab`
    #[arg(short, long, global = true, value_parser = validate_delimiter)]
    pub delimiter: Option<String>,

    /// Input encoding (utf-8 or latin1)
    #[arg(long, global = true, value_parser = validate_encoding)]
    pub encoding: Option<String>,

    /// Treat the first line as data rather than a header
    #[arg(long, global = true)]
    pub no_headers: bool,

    /// Do not ask a language model to explain results
    #[arg(long, global = true)]
    pub no_explain: bool,

    /// Model used for explanations
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Ask questions in plain language
    ///
    /// Starts an interactive prompt, or answers a single question given as
    /// an argument. Understands French and English phrasing such as
    /// "dépendances indirectes de X" or "who uses X".
    Ask(AskArgs),

    /// List the dependencies of a table
    ///
    /// Direct dependencies by default; `--indirect` follows them through
    /// every intermediate table.
    Deps(DepsArgs),

    /// List the tables that use a table
    Users(NameArgs),

    /// Show direct dependencies and direct users of a table
    Show(NameArgs),

    /// List known names similar to the given one
    Suggest(NameArgs),

    /// Show the loaded input and graph size
    Info(InfoArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Command-line values that take precedence over the configuration file.
    pub fn overrides(&self) -> crate::config::Overrides {
        crate::config::Overrides {
            input: self.input.clone(),
            delimiter: self.delimiter.clone(),
            encoding: self.encoding.clone(),
            no_headers: self.no_headers,
            no_explain: self.no_explain,
            model: self.model.clone(),
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::config::Config;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let working_dir = std::env::current_dir()?;
        let mut config = Config::load_or_default(self.config.as_deref(), &working_dir).await?;
        config.apply_overrides(&self.overrides());
        let app = App::from_config(config).await?;

        match &self.command {
            Some(Commands::Ask(args)) => execute::execute_ask(&app, args, output_mode).await,
            Some(Commands::Deps(args)) => execute::execute_deps(&app, args, output_mode).await,
            Some(Commands::Users(args)) => execute::execute_users(&app, args, output_mode).await,
            Some(Commands::Show(args)) => execute::execute_show(&app, args, output_mode).await,
            Some(Commands::Suggest(args)) => {
                execute::execute_suggest(&app, args, output_mode).await
            }
            Some(Commands::Info(args)) => execute::execute_info(&app, args, output_mode).await,
            None => execute::execute_ask(&app, &AskArgs::default(), output_mode).await,
        }
    }
}
