//! Application context for CLI command execution.
//!
//! [`App`] reads the input file once, builds the dependency graph and sets
//! up the explainer. Every command then runs against the same context.
//!
//! # Example
//!
//! ```no_run
//! use tablegraph::app::App;
//! use tablegraph::config::Config;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut config = Config::default();
//!     config.input.path = Some("dependencies.csv".into());
//!     let app = App::from_config(config).await?;
//!     println!("{} names", app.graph().node_count());
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::explain::{self, Explainer};
use crate::graph::DependencyGraph;
use std::path::{Path, PathBuf};
use tablegraph_csv::RowReader;

/// Application context for CLI operations.
pub struct App {
    graph: DependencyGraph,
    config: Config,
    input_path: PathBuf,
    headers: Option<Vec<String>>,
    warning_count: usize,
    explainer: Option<Box<dyn Explainer>>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("input_path", &self.input_path)
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field("warning_count", &self.warning_count)
            .field(
                "explainer",
                &self.explainer.as_ref().map(|_| "<dyn Explainer>"),
            )
            .finish()
    }
}

impl App {
    /// Load the input named by `config` and build the graph.
    ///
    /// Records that cannot be parsed are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid or names no input file
    /// - The input file cannot be read
    /// - The explanation client cannot be constructed
    pub async fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let input_path = config.input_path()?.to_path_buf();
        let reader = RowReader::new(config.input.reader_options()?);

        let rows = reader.read_path(&input_path).await?;
        for warning in &rows.warnings {
            tracing::warn!(
                line = warning.line_number(),
                kind = warning.kind(),
                "{}",
                warning.description()
            );
        }

        let graph = DependencyGraph::build(&rows.rows);
        tracing::info!(
            path = %input_path.display(),
            rows = rows.len(),
            names = graph.node_count(),
            dependencies = graph.edge_count(),
            "Loaded dependency graph"
        );

        let explainer = explain::from_config(&config.explain)?;

        Ok(Self {
            graph,
            config,
            input_path,
            headers: rows.headers,
            warning_count: rows.warnings.len(),
            explainer,
        })
    }

    /// The dependency graph.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The effective configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path the rows were read from.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// The header line, when the input has one.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Number of records skipped while reading.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// The explainer, or `None` when explanations are off.
    pub fn explainer(&self) -> Option<&dyn Explainer> {
        self.explainer.as_deref()
    }
}
