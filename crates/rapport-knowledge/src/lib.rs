//! # rapport-knowledge
//!
//! Knowledge-base documents (`subject -> verb -> objects`), merging of several
//! documents into one statement pool, and random assignment of statements to
//! population nodes.

pub mod base;
pub mod generator;
pub mod lenient;
pub mod samples;

pub use base::{KnowledgeBase, Relation, Subject};
pub use generator::PopulationGenerator;
