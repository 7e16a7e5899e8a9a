//! Span definitions per pipeline stage: knowledge, population, matrix,
//! cycle search, longest path.

/// Create a knowledge-merge span.
#[macro_export]
macro_rules! knowledge_span {
    ($documents:expr) => {
        tracing::info_span!("rapport.knowledge", documents = $documents)
    };
}

/// Create a population-generation span.
#[macro_export]
macro_rules! population_span {
    ($node_count:expr, $pool:expr) => {
        tracing::info_span!("rapport.population", node_count = $node_count, pool = $pool)
    };
}

/// Create an overlap-matrix span.
#[macro_export]
macro_rules! matrix_span {
    ($fingerprint:expr) => {
        tracing::info_span!("rapport.matrix", fingerprint = %$fingerprint)
    };
}

/// Create a cycle-search span.
#[macro_export]
macro_rules! cycle_search_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("rapport.cycles", nodes = $nodes, edges = $edges)
    };
}

/// Create a longest-path span.
#[macro_export]
macro_rules! longest_path_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("rapport.longest_path", nodes = $nodes, edges = $edges)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const KNOWLEDGE: &str = "rapport.knowledge";
    pub const POPULATION: &str = "rapport.population";
    pub const MATRIX: &str = "rapport.matrix";
    pub const CYCLE_SEARCH: &str = "rapport.cycles";
    pub const LONGEST_PATH: &str = "rapport.longest_path";
}
