//! Ranked friendships: positive-overlap pairs with their shared statements.

use std::cmp::Ordering;

use rapport_core::KnowledgeNode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matrix::OverlapMatrix;

/// An unordered pair of nodes that share at least one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friendship {
    /// Lower node index.
    pub node_a: usize,
    /// Higher node index.
    pub node_b: usize,
    /// Overlap count, always positive.
    pub grade: usize,
    /// Distinct shared statements, in `node_a`'s order.
    pub shared_statements: Vec<String>,
}

impl Friendship {
    /// Ranking order: grade descending, then `(node_a, node_b)` ascending.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .grade
            .cmp(&self.grade)
            .then(self.node_a.cmp(&other.node_a))
            .then(self.node_b.cmp(&other.node_b))
    }
}

/// Emit one friendship per positive pair and sort them by rank.
///
/// # Panics
/// Panics if `matrix` was not built from a population of `nodes.len()`.
pub fn extract(matrix: &OverlapMatrix, nodes: &[KnowledgeNode]) -> Vec<Friendship> {
    assert_eq!(
        matrix.size(),
        nodes.len(),
        "matrix size does not match node count"
    );

    let mut friendships: Vec<Friendship> = matrix
        .positive_pairs()
        .map(|(i, j, grade)| Friendship {
            node_a: i,
            node_b: j,
            grade,
            shared_statements: nodes[i].shared_with(&nodes[j]),
        })
        .collect();

    friendships.sort_by(Friendship::rank_cmp);
    debug!(count = friendships.len(), "friendships extracted");
    friendships
}
