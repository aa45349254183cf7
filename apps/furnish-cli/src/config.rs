//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                   | Default | Meaning                              |
//! |----------------------------|---------|--------------------------------------|
//! | `FURNISH_LOG`              | `warn`  | Tracing filter when `RUST_LOG` unset |
//! | `FURNISH_STRICT_SELECTORS` | `false` | Report unknown Add codes             |

use serde::{Deserialize, Serialize};
use std::env;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Fallback tracing filter directive
    pub log_filter: String,

    /// Print a diagnostic for unknown Add codes instead of ignoring them
    pub strict_selectors: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "warn".to_string(),
            strict_selectors: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let config = CliConfig {
            log_filter: lookup("FURNISH_LOG").unwrap_or(defaults.log_filter),

            strict_selectors: match lookup("FURNISH_STRICT_SELECTORS") {
                Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
                    ConfigError::InvalidValue("FURNISH_STRICT_SELECTORS".to_string())
                })?,
                None => defaults.strict_selectors,
            },
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!config.strict_selectors);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("FURNISH_LOG", "debug"),
            ("FURNISH_STRICT_SELECTORS", " true "),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "debug");
        assert!(config.strict_selectors);
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::from_lookup(lookup_from(&[("FURNISH_STRICT_SELECTORS", "yes")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FURNISH_STRICT_SELECTORS");

        assert!(CliConfig::from_lookup(lookup_from(&[("FURNISH_STRICT_SELECTORS", "1")])).is_err());
    }

    #[test]
    fn test_serializes_field_names() {
        let json = serde_json::to_value(CliConfig::default()).unwrap();
        assert_eq!(json["log_filter"], "warn");
        assert_eq!(json["strict_selectors"], false);
    }
}
