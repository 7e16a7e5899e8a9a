//! # rapport-relations
//!
//! The relation engine. Builds the pairwise overlap matrix for a population,
//! ranks friendships with their shared statements, derives a graph from the
//! matrix, and runs the cycle and longest-path searches over it.

pub mod engine;
pub mod friendship;
pub mod graph;
pub mod matrix;
pub mod search;

pub use engine::Relations;
pub use friendship::Friendship;
pub use graph::GraphModel;
pub use matrix::OverlapMatrix;
pub use search::{Cycle, CycleReport, SimplePath};
