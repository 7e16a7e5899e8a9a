//! GraphModel: labels, undirected edges, optional matrix weights.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use serde::Serialize;

use crate::matrix::OverlapMatrix;

/// Labeled nodes with unordered edges.
///
/// An unweighted model stores its edge list. A weighted model keeps the full
/// overlap matrix instead and reads edges from its positive cells. Both modes
/// present the same adjacency to the searches: a node's neighbors appear in
/// edge-list order, which for derived graphs is ascending node index.
#[derive(Debug, Clone, Serialize)]
pub struct GraphModel {
    labels: Vec<String>,
    edges: Vec<(usize, usize)>,
    weights: Option<OverlapMatrix>,
    #[serde(skip)]
    adjacency: Vec<Vec<usize>>,
}

impl GraphModel {
    /// Build from explicit labels and edges. Each edge is stored as
    /// `(min, max)`; self-loops and repeated pairs are ignored.
    ///
    /// # Panics
    /// Panics if an edge names a node outside `0..labels.len()`.
    pub fn new(labels: Vec<String>, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let n = labels.len();
        let mut kept: Vec<(usize, usize)> = Vec::new();
        for (a, b) in edges {
            assert!(
                a < n && b < n,
                "edge ({a}, {b}) out of range for graph of {n} nodes"
            );
            let pair = (a.min(b), a.max(b));
            if a != b && !kept.contains(&pair) {
                kept.push(pair);
            }
        }
        let adjacency = adjacency_of(n, kept.iter().copied());
        Self {
            labels,
            edges: kept,
            weights: None,
            adjacency,
        }
    }

    /// Build a weighted model. Edges are the matrix's positive pairs.
    pub fn with_weights(labels: Vec<String>, weights: OverlapMatrix) -> Self {
        assert_eq!(
            labels.len(),
            weights.size(),
            "label count does not match matrix size"
        );
        let adjacency = adjacency_of(
            labels.len(),
            weights.positive_pairs().map(|(i, j, _)| (i, j)),
        );
        Self {
            labels,
            edges: Vec::new(),
            weights: Some(weights),
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Display label of node `i`.
    pub fn label(&self, i: usize) -> &str {
        self.check(i);
        &self.labels[i]
    }

    pub fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }

    pub fn weights(&self) -> Option<&OverlapMatrix> {
        self.weights.as_ref()
    }

    /// Edges as `(i, j)` with `i < j`, in edge-list order.
    pub fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize)> + '_> {
        match &self.weights {
            Some(matrix) => Box::new(matrix.positive_pairs().map(|(i, j, _)| (i, j))),
            None => Box::new(self.edges.iter().copied()),
        }
    }

    /// Neighbors of node `i` in edge-list order.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.check(i);
        &self.adjacency[i]
    }

    pub fn degree(&self, i: usize) -> usize {
        self.neighbors(i).len()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.check(b);
        self.neighbors(a).contains(&b)
    }

    /// Overlap weight of edge `(a, b)`. `None` for unweighted models or
    /// missing edges.
    pub fn grade(&self, a: usize, b: usize) -> Option<usize> {
        let matrix = self.weights.as_ref()?;
        let grade = matrix.get(a, b);
        (grade > 0).then_some(grade)
    }

    /// Component representative for every node.
    pub fn components(&self) -> Vec<usize> {
        let mut sets = UnionFind::new(self.node_count());
        for (a, b) in self.edges() {
            sets.union(a, b);
        }
        sets.into_labeling()
    }

    /// Copy into a petgraph undirected graph. Node `i` maps to `NodeIndex(i)`;
    /// edge weights are grades, or 1 for unweighted models.
    pub fn to_petgraph(&self) -> UnGraph<String, usize> {
        let mut graph = UnGraph::with_capacity(self.node_count(), self.edge_count());
        for label in &self.labels {
            graph.add_node(label.clone());
        }
        for (a, b) in self.edges() {
            let weight = self.grade(a, b).unwrap_or(1);
            graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), weight);
        }
        graph
    }

    fn check(&self, i: usize) {
        assert!(
            i < self.labels.len(),
            "node index {i} out of range for graph of {} nodes",
            self.labels.len()
        );
    }
}

fn adjacency_of(n: usize, edges: impl Iterator<Item = (usize, usize)>) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); n];
    for (a, b) in edges {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|k| format!("Node {k}")).collect()
    }

    #[test]
    fn explicit_edges_are_normalized() {
        let graph = GraphModel::new(labels(3), [(1, 0), (0, 1), (2, 2), (2, 1)]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 2));
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.grade(0, 1), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn edge_past_end_panics() {
        GraphModel::new(labels(2), [(0, 2)]);
    }

    #[test]
    fn components_split_isolated_nodes() {
        let graph = GraphModel::new(labels(5), [(0, 1), (3, 4)]);
        let comps = graph.components();
        assert_eq!(comps[0], comps[1]);
        assert_eq!(comps[3], comps[4]);
        assert_ne!(comps[0], comps[2]);
        assert_ne!(comps[0], comps[3]);
    }

    #[test]
    fn petgraph_copy_matches() {
        let graph = GraphModel::new(labels(4), [(0, 1), (1, 2), (2, 0)]);
        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 4);
        assert_eq!(pg.edge_count(), 3);
        assert_eq!(petgraph::algo::connected_components(&pg), 2);
        assert_eq!(pg[NodeIndex::new(3)], "Node 4");
    }
}
