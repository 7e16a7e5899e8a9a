//! Longest simple path by exhaustive backtracking.
//!
//! Each start node gets its own walk that tries every incident edge to an
//! unvisited neighbor, recursing before backtracking. When a node's branches
//! are exhausted the current path is offered as the walk's best; only a
//! strictly longer path replaces it. The per-start bests are then reduced
//! the same way, so ties go to the earliest start. There is no pruning: the
//! cost is exponential in the worst case.

use tracing::{debug, instrument};

use super::SimplePath;
use crate::graph::GraphModel;

/// Longest simple path over all start nodes. Empty only for an empty graph.
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn find_longest_path(graph: &GraphModel) -> SimplePath {
    let best = (0..graph.node_count())
        .map(|start| longest_from(graph, start))
        .fold(SimplePath::default(), |best, candidate| {
            if candidate.len() > best.len() {
                candidate
            } else {
                best
            }
        });

    debug!(len = best.len(), "longest path found");
    best
}

/// Longest simple path starting at `start`.
pub fn longest_from(graph: &GraphModel, start: usize) -> SimplePath {
    let mut walk = PathWalk {
        graph,
        visited: vec![false; graph.node_count()],
        current: Vec::new(),
        best: Vec::new(),
    };
    walk.visit(start);
    SimplePath { nodes: walk.best }
}

/// Backtracking state for one start node.
struct PathWalk<'a> {
    graph: &'a GraphModel,
    visited: Vec<bool>,
    current: Vec<usize>,
    best: Vec<usize>,
}

impl PathWalk<'_> {
    fn visit(&mut self, node: usize) {
        self.visited[node] = true;
        self.current.push(node);

        for &next in self.graph.neighbors(node) {
            if !self.visited[next] {
                self.visit(next);
            }
        }

        if self.current.len() > self.best.len() {
            self.best.clone_from(&self.current);
        }

        self.visited[node] = false;
        self.current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> GraphModel {
        let labels = (1..=n).map(|k| format!("Node {k}")).collect();
        GraphModel::new(labels, edges.iter().copied())
    }

    #[test]
    fn empty_graph_has_empty_path() {
        assert!(find_longest_path(&graph(0, &[])).is_empty());
    }

    #[test]
    fn edgeless_graph_yields_first_node() {
        let path = find_longest_path(&graph(3, &[]));
        assert_eq!(path.nodes, vec![0]);
    }

    #[test]
    fn triangle_from_first_start() {
        let path = find_longest_path(&graph(4, &[(0, 1), (0, 2), (1, 2)]));
        assert_eq!(path.nodes, vec![0, 1, 2]);
    }

    #[test]
    fn later_start_wins_when_strictly_longer() {
        // Star centred on 0 with a tail 3-4-5; the longest path starts at a leaf.
        let path = find_longest_path(&graph(6, &[(0, 1), (0, 2), (0, 3), (3, 4), (4, 5)]));
        assert_eq!(path.nodes, vec![1, 0, 3, 4, 5]);
    }

    #[test]
    fn backtracks_past_dead_ends() {
        // From 0 the first branch (1) dead-ends; the path through 2 is longer.
        let path = longest_from(&graph(5, &[(0, 1), (0, 2), (2, 3), (3, 4)]), 0);
        assert_eq!(path.nodes, vec![0, 2, 3, 4]);
    }
}
