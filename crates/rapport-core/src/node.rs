//! A single population member and the statements it knows.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One knowledge holder. Identified by its position in the population.
///
/// Statements keep their assignment order and may repeat. Overlap queries
/// compare by value, so repeats never count twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    id: usize,
    statements: Vec<String>,
}

impl KnowledgeNode {
    pub fn new(id: usize, statements: Vec<String>) -> Self {
        Self { id, statements }
    }

    /// Zero-based position of this node in its population.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Everything this node knows.
    pub fn share(&self) -> Vec<String> {
        self.statements.clone()
    }

    /// The first `n` statements (fewer if the node knows less).
    pub fn share_first(&self, n: usize) -> Vec<String> {
        self.statements.iter().take(n).cloned().collect()
    }

    /// Statements at positions `from..=to`, clamped to what the node holds.
    /// An inverted range yields nothing.
    pub fn share_range(&self, from: usize, to: usize) -> Vec<String> {
        if to < from {
            return Vec::new();
        }
        self.statements
            .iter()
            .skip(from)
            .take(to - from + 1)
            .cloned()
            .collect()
    }

    /// Number of distinct statement values held by both this node and `heard`.
    pub fn listen(&self, heard: &[String]) -> usize {
        let heard: HashSet<&str> = heard.iter().map(String::as_str).collect();
        self.distinct()
            .filter(|statement| heard.contains(statement))
            .count()
    }

    /// Distinct statements shared with `other`, in this node's order.
    pub fn shared_with(&self, other: &KnowledgeNode) -> Vec<String> {
        let theirs: HashSet<&str> = other.statements.iter().map(String::as_str).collect();
        self.distinct()
            .filter(|statement| theirs.contains(statement))
            .map(str::to_string)
            .collect()
    }

    /// Statement values in first-seen order, duplicates skipped.
    fn distinct(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.statements
            .iter()
            .map(String::as_str)
            .filter(move |statement| seen.insert(*statement))
    }
}
