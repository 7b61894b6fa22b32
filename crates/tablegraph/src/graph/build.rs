//! One-pass graph construction from rows.

use super::DependencyGraph;
use crate::domain::NameKey;
use crate::registry::NameRegistry;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Incremental builder for a [`DependencyGraph`].
///
/// Rows are fed one at a time with [`add_row`](Self::add_row); within a row,
/// every value depends on every value after it. [`finish`](Self::finish)
/// freezes the result.
///
/// ```
/// use tablegraph::graph::DependencyGraph;
///
/// let mut builder = DependencyGraph::builder();
/// builder.add_row(["app.orders", "ref.customers", "ref.products"]);
/// builder.add_row(["ref.orphan"]);
/// let graph = builder.finish();
///
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DiGraph<NameKey, ()>,
    node_map: HashMap<NameKey, NodeIndex>,
    registry: NameRegistry,
    rows_seen: usize,
    blanks_skipped: usize,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one row of related names.
    ///
    /// Blank values are dropped. Every remaining value becomes a node, even
    /// when it is alone in the row.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rows_seen += 1;

        let mut nodes = Vec::new();
        for value in row {
            let value = value.as_ref();
            if value.trim().is_empty() {
                self.blanks_skipped += 1;
                continue;
            }
            let key = self.registry.register(value);
            nodes.push(self.ensure_node(key));
        }

        for (i, &source) in nodes.iter().enumerate() {
            for &target in &nodes[i + 1..] {
                // Same key spelled twice in one row: no self-loop.
                if source != target {
                    self.graph.update_edge(source, target, ());
                }
            }
        }
    }

    /// Freeze the graph.
    pub fn finish(self) -> DependencyGraph {
        tracing::debug!(
            rows = self.rows_seen,
            blanks_skipped = self.blanks_skipped,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "Built dependency graph"
        );

        DependencyGraph {
            graph: self.graph,
            node_map: self.node_map,
            registry: self.registry,
        }
    }

    fn ensure_node(&mut self, key: NameKey) -> NodeIndex {
        if let Some(&node) = self.node_map.get(&key) {
            return node;
        }
        let node = self.graph.add_node(key.clone());
        self.node_map.insert(key, node);
        node
    }
}
