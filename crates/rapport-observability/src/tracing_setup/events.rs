//! Structured log events for pipeline milestones.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a knowledge merge.
pub fn knowledge_merged(documents: usize, subjects: usize, statements: usize) {
    tracing::info!(
        event = "knowledge_merged",
        documents = documents,
        subjects = subjects,
        statements = statements,
        "knowledge documents merged"
    );
}

/// Log a generated population.
pub fn population_generated(fingerprint: &str, nodes: usize, seed: Option<u64>) {
    tracing::info!(
        event = "population_generated",
        fingerprint = %fingerprint,
        nodes = nodes,
        seed = ?seed,
        "population generated"
    );
}

/// Log a completed overlap matrix.
pub fn matrix_built(fingerprint: &str, size: usize, max_grade: usize) {
    tracing::info!(
        event = "matrix_built",
        fingerprint = %fingerprint,
        size = size,
        max_grade = max_grade,
        "overlap matrix built"
    );
}

/// Log the friendship ranking.
pub fn friendships_extracted(count: usize, top_grade: Option<usize>) {
    tracing::info!(
        event = "friendships_extracted",
        count = count,
        top_grade = ?top_grade,
        "friendships extracted"
    );
}

/// Log the cycle search result.
pub fn cycles_found(count: usize, components: usize) {
    tracing::info!(
        event = "cycles_found",
        count = count,
        components = components,
        "cycle search finished"
    );
}

/// Log the longest-path result.
pub fn longest_path_found(len: usize, nodes: usize) {
    if nodes > 1 && len == 1 {
        tracing::warn!(
            event = "longest_path_found",
            len = len,
            nodes = nodes,
            "graph has no edges; longest path is a single node"
        );
        return;
    }
    tracing::info!(
        event = "longest_path_found",
        len = len,
        nodes = nodes,
        "longest path found"
    );
}
