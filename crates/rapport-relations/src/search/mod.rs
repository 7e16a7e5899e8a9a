//! Exhaustive searches over a [`GraphModel`](crate::graph::GraphModel).

pub mod cycles;
pub mod longest_path;

use serde::{Deserialize, Serialize};

pub use cycles::find_cycles;
pub use longest_path::find_longest_path;

/// A closed walk `v0, v1, ..., vk, v0` over at least three distinct nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Node indices, first repeated at the end.
    pub nodes: Vec<usize>,
}

impl Cycle {
    /// Number of distinct nodes on the cycle.
    pub fn distinct_len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive node pairs, including the closing pair.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Cycles found by [`find_cycles`]. At most one per connected component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub cycles: Vec<Cycle>,
}

impl CycleReport {
    pub fn count(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

/// A sequence of distinct, edge-connected nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePath {
    pub nodes: Vec<usize>,
}

impl SimplePath {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
