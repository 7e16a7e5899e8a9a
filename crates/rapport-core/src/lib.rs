//! # rapport-core
//!
//! Foundation crate for the Rapport workspace.
//! Defines knowledge nodes, populations, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod node;
pub mod population;

// Re-export the most commonly used types at the crate root.
pub use config::RapportConfig;
pub use errors::{RapportError, RapportResult};
pub use node::KnowledgeNode;
pub use population::Population;
