//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

use super::validators::validate_name;

/// Arguments for the `ask` command
#[derive(Parser, Debug, Clone, Default)]
pub struct AskArgs {
    /// Answer this question and exit instead of starting the prompt
    ///
    /// Example: "qui utilise REF.CLIENTS ?"
    pub question: Option<String>,
}

/// Arguments for the `deps` command
#[derive(Parser, Debug, Clone)]
pub struct DepsArgs {
    /// Table name (case-insensitive)
    #[arg(value_parser = validate_name)]
    pub name: String,

    /// Follow dependencies transitively
    #[arg(long)]
    pub indirect: bool,
}

/// Arguments for commands that take a single table name
#[derive(Parser, Debug, Clone)]
pub struct NameArgs {
    /// Table name (case-insensitive)
    #[arg(value_parser = validate_name)]
    pub name: String,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {}
