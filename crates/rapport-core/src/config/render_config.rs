use serde::{Deserialize, Serialize};

use super::defaults;

/// Output format for the friendship ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendshipFormat {
    #[default]
    Plain,
    Json,
    Yaml,
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Print zero cells in the matrix table instead of blanks.
    pub show_zero: bool,
    /// Format used for the friendship ranking.
    pub friendship_format: FriendshipFormat,
    /// Prefix for node display labels ("Node" gives "Node 1", "Node 2", ...).
    pub label_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_zero: defaults::DEFAULT_SHOW_ZERO,
            friendship_format: FriendshipFormat::default(),
            label_prefix: defaults::DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}
