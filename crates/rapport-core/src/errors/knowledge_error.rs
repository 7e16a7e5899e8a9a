/// Knowledge-base and node-assignment errors.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to parse knowledge document `{source_name}`: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("invalid knowledge limits: min {min} exceeds max {max}")]
    InvalidLimits { min: usize, max: usize },
}
