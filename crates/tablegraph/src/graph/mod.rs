//! Dependency graph engine.
//!
//! # Graph Representation and Edge Direction Convention
//!
//! Edges point from **dependent -> dependency**: a row `[A, B, C]` declares
//! that `A` depends on `B` and `C`, and `B` depends on `C`. Edges are stored
//! once in a petgraph `DiGraph`; reverse lookups walk the same edges with
//! `Direction::Incoming`, so the forward and reverse views are always exact
//! transposes of each other.
//!
//! Node weights are [`NameKey`]s. Display spellings live in the
//! [`NameRegistry`] and are only applied when rendering results.
//!
//! # Queries
//!
//! | Query | Edges followed |
//! |-------|----------------|
//! | [`direct_dependencies`](DependencyGraph::direct_dependencies) | outgoing, one hop |
//! | [`indirect_dependencies`](DependencyGraph::indirect_dependencies) | outgoing, transitive |
//! | [`users`](DependencyGraph::users) | incoming, one hop |
//! | [`overview`](DependencyGraph::overview) | outgoing and incoming, one hop |
//!
//! Results are display spellings sorted in ascending (case-sensitive) order.
//! A name that is not in the graph yields [`Lookup::Unknown`] with up to
//! five similar names.
//!
//! # Thread Safety
//!
//! The graph is never mutated after [`GraphBuilder::finish`]; all queries
//! take `&self`, so it can be shared across threads without locking.

mod build;
mod suggest;
mod traverse;

pub use build::GraphBuilder;

use crate::domain::{Lookup, NameKey, Overview, UnknownName};
use crate::registry::NameRegistry;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Immutable dependency graph with its name registry.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Edge source depends on edge target.
    graph: DiGraph<NameKey, ()>,

    /// Every key in the graph has exactly one node.
    node_map: HashMap<NameKey, NodeIndex>,

    registry: NameRegistry,
}

impl DependencyGraph {
    /// Start building a graph row by row.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Build a graph from all rows at once.
    pub fn build<R, I, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new();
        for row in rows {
            builder.add_row(row);
        }
        builder.finish()
    }

    /// Names `name` depends on directly.
    pub fn direct_dependencies(&self, name: &str) -> Lookup<Vec<String>> {
        self.with_node(name, |node| {
            self.render(self.graph.neighbors_directed(node, Direction::Outgoing))
        })
    }

    /// Names `name` depends on directly or through other names.
    ///
    /// `name` itself is included only when it sits on a cycle.
    pub fn indirect_dependencies(&self, name: &str) -> Lookup<Vec<String>> {
        self.with_node(name, |node| {
            self.render(traverse::reachable_from(&self.graph, node))
        })
    }

    /// Names that depend directly on `name`.
    pub fn users(&self, name: &str) -> Lookup<Vec<String>> {
        self.with_node(name, |node| {
            self.render(self.graph.neighbors_directed(node, Direction::Incoming))
        })
    }

    /// Direct dependencies and direct users of `name`.
    pub fn overview(&self, name: &str) -> Lookup<Overview> {
        self.with_node(name, |node| Overview {
            name: self.registry.resolve(&self.graph[node]),
            dependencies: self.render(self.graph.neighbors_directed(node, Direction::Outgoing)),
            users: self.render(self.graph.neighbors_directed(node, Direction::Incoming)),
        })
    }

    /// Known names similar to `query`, at most five.
    ///
    /// An empty list means nothing similar exists.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        suggest::similar_names(&self.registry, query)
    }

    /// Returns `true` if `name` (in any case) is part of the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(&NameKey::fold(name))
    }

    /// Display spelling for `name`, upper-cased when the name is unknown.
    pub fn display_name(&self, name: &str) -> String {
        self.registry.resolve(&NameKey::fold(name))
    }

    /// Number of distinct names.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct dependency edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The name registry backing display spellings.
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    fn with_node<T>(&self, name: &str, query: impl FnOnce(NodeIndex) -> T) -> Lookup<T> {
        let key = NameKey::fold(name);
        match self.node_map.get(&key) {
            Some(&node) => Lookup::Found(query(node)),
            None => {
                tracing::debug!(query = name, "Unknown name");
                Lookup::Unknown(UnknownName {
                    name: self.registry.resolve(&key),
                    suggestions: self.suggest(name),
                })
            }
        }
    }

    fn render(&self, nodes: impl IntoIterator<Item = NodeIndex>) -> Vec<String> {
        let mut names: Vec<String> = nodes
            .into_iter()
            .map(|node| self.registry.resolve(&self.graph[node]))
            .collect();
        names.sort();
        names
    }
}
