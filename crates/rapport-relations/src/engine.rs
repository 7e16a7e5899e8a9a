//! Relations: owns one population snapshot with its matrix and ranking,
//! and hands out derived graphs and search results.

use rapport_core::config::defaults::DEFAULT_LABEL_PREFIX;
use rapport_core::{KnowledgeNode, Population};
use tracing::info;

use crate::friendship::{self, Friendship};
use crate::graph::GraphModel;
use crate::matrix::OverlapMatrix;
use crate::search::{self, CycleReport, SimplePath};

/// Matrix and ranked friendships for one population, built once.
#[derive(Debug, Clone)]
pub struct Relations {
    population: Population,
    matrix: OverlapMatrix,
    friendships: Vec<Friendship>,
}

impl Relations {
    pub fn new(population: Population) -> Self {
        let matrix = OverlapMatrix::build(population.nodes());
        let friendships = friendship::extract(&matrix, population.nodes());
        info!(
            nodes = population.len(),
            friendships = friendships.len(),
            max_grade = matrix.max_grade(),
            "relations built"
        );
        Self {
            population,
            matrix,
            friendships,
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn nodes(&self) -> &[KnowledgeNode] {
        self.population.nodes()
    }

    pub fn matrix(&self) -> &OverlapMatrix {
        &self.matrix
    }

    /// Friendships, grade descending then pair ascending.
    pub fn friendships(&self) -> &[Friendship] {
        &self.friendships
    }

    /// Unweighted graph with labels `"{prefix} k"`, k 1-based.
    pub fn graph(&self, prefix: &str) -> GraphModel {
        GraphModel::derive(&self.matrix, prefix)
    }

    /// Graph carrying the overlap matrix as edge weights.
    pub fn weighted_graph(&self, prefix: &str) -> GraphModel {
        GraphModel::derive_weighted(&self.matrix, prefix)
    }

    /// First cycle of every component of the derived graph.
    pub fn cycles(&self) -> CycleReport {
        search::find_cycles(&self.graph(DEFAULT_LABEL_PREFIX))
    }

    /// Longest simple path in the derived graph.
    pub fn longest_path(&self) -> SimplePath {
        search::find_longest_path(&self.graph(DEFAULT_LABEL_PREFIX))
    }
}

impl From<Population> for Relations {
    fn from(population: Population) -> Self {
        Self::new(population)
    }
}
