//! Top-level Causeway configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, IdentificationConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAUSEWAY_*`)
/// 2. Config file passed to [`CausewayConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CausewayConfig {
    pub identification: IdentificationConfig,
    pub observability: ObservabilityConfig,
}

impl CausewayConfig {
    /// Load a TOML file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: CausewayConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded causeway config");
        Ok(config)
    }

    /// Load configuration from a TOML string. No environment overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CausewayConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identification.parallel_threshold == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "identification.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !defaults::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", defaults::LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply `CAUSEWAY_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CAUSEWAY_MAX_ADJUSTMENT_SIZE").and_then(|v| v.parse().ok()) {
            self.identification.max_adjustment_size = v;
        }
        if let Some(v) = lookup("CAUSEWAY_ALLOW_UNBOUNDED").and_then(|v| v.parse().ok()) {
            self.identification.allow_unbounded = v;
        }
        if let Some(v) = lookup("CAUSEWAY_TRY_FRONTDOOR").and_then(|v| v.parse().ok()) {
            self.identification.try_frontdoor = v;
        }
        if let Some(v) = lookup("CAUSEWAY_PARALLEL_SEARCH").and_then(|v| v.parse().ok()) {
            self.identification.parallel_search = v;
        }
        if let Some(v) = lookup("CAUSEWAY_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }
}
