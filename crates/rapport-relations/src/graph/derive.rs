//! Graph derivation from a completed overlap matrix.

use tracing::debug;

use super::GraphModel;
use crate::matrix::OverlapMatrix;

/// One-based display label, e.g. `node_label("Node", 0) == "Node 1"`.
pub fn node_label(prefix: &str, index: usize) -> String {
    format!("{prefix} {}", index + 1)
}

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| node_label(prefix, i)).collect()
}

impl GraphModel {
    /// Unweighted derivation: one edge per positive pair, ascending.
    pub fn derive(matrix: &OverlapMatrix, prefix: &str) -> Self {
        let graph = Self::new(
            labels(prefix, matrix.size()),
            matrix.positive_pairs().map(|(i, j, _)| (i, j)),
        );
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "unweighted graph derived"
        );
        graph
    }

    /// Weighted derivation: same nodes, the matrix retained as edge weights.
    pub fn derive_weighted(matrix: &OverlapMatrix, prefix: &str) -> Self {
        let graph = Self::with_weights(labels(prefix, matrix.size()), matrix.clone());
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "weighted graph derived"
        );
        graph
    }
}
