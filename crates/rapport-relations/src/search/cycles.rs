//! First-cycle-per-component search.
//!
//! A backtracking DFS is started from the lowest-indexed node of every
//! component. Nodes are marked while on the current path and unmarked on
//! backtrack. A tree edge is consumed while its subtree is being explored and
//! released afterwards; a consumed edge is never used to close a cycle.
//!
//! The walk stops at the first back edge that reaches a path node other than
//! the parent. That cycle is reported and the whole component is then
//! skipped, so each component reports at most one cycle. Because the walk
//! backtracks over every simple path from its root, a component with any
//! cycle always reports one.

use std::collections::HashSet;

use tracing::{debug, instrument};

use super::{Cycle, CycleReport};
use crate::graph::GraphModel;

/// Report at most one cycle per connected component, in root order.
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn find_cycles(graph: &GraphModel) -> CycleReport {
    let n = graph.node_count();
    let components = graph.components();
    let mut explored = vec![false; n];
    let mut report = CycleReport::default();

    for root in 0..n {
        if explored[root] {
            continue;
        }

        let mut walk = CycleWalk::new(graph);
        if let Some(nodes) = walk.visit(root, None) {
            debug!(root, len = nodes.len() - 1, "cycle found");
            report.cycles.push(Cycle { nodes });
        }

        let component = components[root];
        for (node, done) in explored.iter_mut().enumerate() {
            if components[node] == component {
                *done = true;
            }
        }
    }

    report
}

/// DFS state for one root.
struct CycleWalk<'a> {
    graph: &'a GraphModel,
    on_path: Vec<bool>,
    path: Vec<usize>,
    consumed: HashSet<(usize, usize)>,
}

impl<'a> CycleWalk<'a> {
    fn new(graph: &'a GraphModel) -> Self {
        Self {
            graph,
            on_path: vec![false; graph.node_count()],
            path: Vec::new(),
            consumed: HashSet::new(),
        }
    }

    fn visit(&mut self, node: usize, parent: Option<usize>) -> Option<Vec<usize>> {
        self.on_path[node] = true;
        self.path.push(node);

        for &next in self.graph.neighbors(node) {
            let edge = (node.min(next), node.max(next));

            if !self.on_path[next] {
                if self.consumed.insert(edge) {
                    if let Some(cycle) = self.visit(next, Some(node)) {
                        return Some(cycle);
                    }
                    self.consumed.remove(&edge);
                }
            } else if Some(next) != parent
                && self.path.len() > 2
                && !self.consumed.contains(&edge)
            {
                if let Some(start) = self.path.iter().position(|&v| v == next) {
                    let mut cycle = self.path[start..].to_vec();
                    cycle.push(next);
                    return Some(cycle);
                }
            }
        }

        self.path.pop();
        self.on_path[node] = false;
        None
    }
}
