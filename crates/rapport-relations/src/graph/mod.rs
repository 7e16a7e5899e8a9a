//! Graph derived from an overlap matrix: labeled nodes and unordered edges.

mod derive;
mod model;

pub use derive::node_label;
pub use model::GraphModel;
