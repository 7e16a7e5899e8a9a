//! Pairwise overlap (acceptance) matrix.

use rapport_core::KnowledgeNode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Square matrix of distinct-statement overlap counts between nodes.
///
/// Symmetric with a zero diagonal. Stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMatrix {
    size: usize,
    cells: Vec<usize>,
}

impl OverlapMatrix {
    /// Compare every ordered pair of distinct nodes.
    pub fn build(nodes: &[KnowledgeNode]) -> Self {
        let size = nodes.len();
        let mut cells = vec![0; size * size];

        for i in 0..size {
            for j in 0..size {
                if i != j {
                    cells[i * size + j] = nodes[j].listen(nodes[i].statements());
                }
            }
        }

        debug!(size, "overlap matrix built");
        Self { size, cells }
    }

    /// Number of nodes (rows and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Overlap between nodes `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is outside `0..size`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.check(i);
        self.check(j);
        self.cells[i * self.size + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[usize] {
        self.check(i);
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Unordered pairs `(i, j)` with `i < j` and a positive overlap,
    /// in ascending `(i, j)` order.
    pub fn positive_pairs(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        (0..self.size).flat_map(move |i| {
            ((i + 1)..self.size).filter_map(move |j| {
                let grade = self.cells[i * self.size + j];
                (grade > 0).then_some((i, j, grade))
            })
        })
    }

    /// Largest overlap in the matrix, or 0 when there is none.
    pub fn max_grade(&self) -> usize {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    fn check(&self, index: usize) {
        assert!(
            index < self.size,
            "matrix index {index} out of range for {n}x{n} matrix",
            n = self.size
        );
    }
}
