//! Reachability over the dependency graph.

use crate::domain::NameKey;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashSet;

/// Every node reachable from `start` by one or more outgoing edges.
///
/// Uses an explicit stack. A node is marked visited before it is pushed,
/// so each node is expanded at most once and cycles terminate.
///
/// `start` is not marked up front: it is part of the result exactly when a
/// cycle leads back to it.
pub(super) fn reachable_from(
    graph: &DiGraph<NameKey, ()>,
    start: NodeIndex,
) -> HashSet<NodeIndex> {
    let mut visited = HashSet::new();
    let mut stack: Vec<NodeIndex> = Vec::new();

    for next in graph.neighbors_directed(start, Direction::Outgoing) {
        if visited.insert(next) {
            stack.push(next);
        }
    }

    while let Some(current) = stack.pop() {
        for next in graph.neighbors_directed(current, Direction::Outgoing) {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> (DiGraph<NameKey, ()>, Vec<NodeIndex>) {
        let mut graph = DiGraph::new();
        let nodes: Vec<NodeIndex> = (0..len)
            .map(|i| graph.add_node(NameKey::fold(&format!("n.{i}"))))
            .collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1], ());
        }
        (graph, nodes)
    }

    #[test]
    fn follows_a_chain_to_the_end() {
        let (graph, nodes) = chain(5);

        let reached = reachable_from(&graph, nodes[0]);

        assert_eq!(reached.len(), 4);
        assert!(!reached.contains(&nodes[0]));
        assert!(reached.contains(&nodes[4]));
    }

    #[test]
    fn leaf_reaches_nothing() {
        let (graph, nodes) = chain(3);
        assert!(reachable_from(&graph, nodes[2]).is_empty());
    }

    #[test]
    fn cycle_back_to_start_includes_start() {
        let (mut graph, nodes) = chain(3);
        graph.add_edge(nodes[2], nodes[0], ());

        let reached = reachable_from(&graph, nodes[0]);

        assert_eq!(reached.len(), 3);
        assert!(reached.contains(&nodes[0]));
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let (graph, nodes) = chain(50_000);
        assert_eq!(reachable_from(&graph, nodes[0]).len(), 49_999);
    }
}
