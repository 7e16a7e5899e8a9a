use serde::{Deserialize, Serialize};

use super::defaults;

/// Random node-assignment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of knowledge nodes to generate.
    pub node_count: usize,
    /// Minimum statements drawn per node (inclusive).
    pub min_statements: usize,
    /// Maximum statements drawn per node (exclusive, unless equal to min).
    pub max_statements: usize,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            node_count: defaults::DEFAULT_NODE_COUNT,
            min_statements: defaults::DEFAULT_MIN_STATEMENTS,
            max_statements: defaults::DEFAULT_MAX_STATEMENTS,
            seed: None,
        }
    }
}
