pub mod defaults;
mod observability_config;
mod population_config;
mod render_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use population_config::PopulationConfig;
pub use render_config::{FriendshipFormat, RenderConfig};

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RapportConfig {
    pub population: PopulationConfig,
    pub render: RenderConfig,
    pub observability: ObservabilityConfig,
}

impl RapportConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let population = &self.population;
        if population.node_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "population.node_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if population.min_statements > population.max_statements {
            return Err(ConfigError::InvalidValue {
                field: "population.min_statements",
                reason: format!(
                    "{} exceeds max_statements {}",
                    population.min_statements, population.max_statements
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = RapportConfig::from_toml_str("").unwrap();
        assert_eq!(config, RapportConfig::default());
        assert_eq!(config.population.node_count, defaults::DEFAULT_NODE_COUNT);
        assert_eq!(config.render.label_prefix, "Node");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = RapportConfig::from_toml_str(
            r#"
            [population]
            node_count = 4
            seed = 7

            [render]
            friendship_format = "yaml"
            "#,
        )
        .unwrap();
        assert_eq!(config.population.node_count, 4);
        assert_eq!(config.population.seed, Some(7));
        assert_eq!(config.population.min_statements, defaults::DEFAULT_MIN_STATEMENTS);
        assert_eq!(config.render.friendship_format, FriendshipFormat::Yaml);
        assert!(!config.render.show_zero);
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let err = RapportConfig::from_toml_str(
            r#"
            [population]
            min_statements = 8
            max_statements = 3
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "population.min_statements", .. }
        ));
    }

    #[test]
    fn zero_nodes_rejected() {
        let err = RapportConfig::from_toml_str("[population]\nnode_count = 0\n").unwrap_err();
        assert!(err.to_string().contains("node_count"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = RapportConfig::from_toml_str("[population\nnode_count = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
