mod config_error;
mod knowledge_error;
mod rapport_error;

pub use config_error::ConfigError;
pub use knowledge_error::KnowledgeError;
pub use rapport_error::{RapportError, RapportResult};
