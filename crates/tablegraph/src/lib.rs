//! Tablegraph - dependency questions over tables.
//!
//! Tables (or any other named entities) declare their dependencies by
//! appearing together in the rows of a delimited export: within a row, every
//! name depends on every name to its right. This crate builds that graph once
//! and answers direct, indirect and reverse ("who uses it") queries, with
//! substring suggestions when a name is unknown.
//!
//! The engine lives in [`graph`] and [`registry`] and performs no I/O. The
//! remaining modules are the surrounding tool: configuration, the question
//! dispatcher, optional language-model explanations and the CLI.
//!
//! # Example
//!
//! ```
//! use tablegraph::domain::Lookup;
//! use tablegraph::graph::DependencyGraph;
//!
//! let graph = DependencyGraph::build([
//!     vec!["SCHEMA.A", "SCHEMA.B"],
//!     vec!["SCHEMA.B", "SCHEMA.C"],
//! ]);
//!
//! assert_eq!(
//!     graph.indirect_dependencies("schema.a"),
//!     Lookup::Found(vec!["SCHEMA.B".to_string(), "SCHEMA.C".to_string()])
//! );
//! ```

#![forbid(unsafe_code)]

// Engine
pub mod domain;
pub mod graph;
pub mod registry;

pub mod error;

// Surrounding tool
pub mod app;
pub mod cli;
pub mod config;
pub mod explain;
pub mod intent;
pub mod output;
pub mod session;
