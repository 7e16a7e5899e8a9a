//! An ordered population of knowledge nodes.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::node::KnowledgeNode;

/// Nodes in assignment order. Node `i` always has id `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    nodes: Vec<KnowledgeNode>,
}

impl Population {
    /// Build a population from per-node statement lists, assigning ids by position.
    pub fn new(assignments: Vec<Vec<String>>) -> Self {
        let nodes = assignments
            .into_iter()
            .enumerate()
            .map(|(id, statements)| KnowledgeNode::new(id, statements))
            .collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[KnowledgeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnowledgeNode> {
        self.nodes.iter()
    }

    /// Content hash of the snapshot (hex). Two populations with the same
    /// statements in the same order hash identically.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for node in &self.nodes {
            hasher.update(&(node.len() as u64).to_le_bytes());
            for statement in node.statements() {
                hasher.update(&(statement.len() as u64).to_le_bytes());
                hasher.update(statement.as_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl Index<usize> for Population {
    type Output = KnowledgeNode;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.nodes.len(),
            "node index {index} out of range for population of {}",
            self.nodes.len()
        );
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a KnowledgeNode;
    type IntoIter = std::slice::Iter<'a, KnowledgeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
