// Single source of truth for all default values.

// --- Population ---
pub const DEFAULT_NODE_COUNT: usize = 10;
pub const DEFAULT_MIN_STATEMENTS: usize = 4;
pub const DEFAULT_MAX_STATEMENTS: usize = 6; // exclusive

// --- Render ---
pub const DEFAULT_SHOW_ZERO: bool = false;
pub const DEFAULT_LABEL_PREFIX: &str = "Node";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
