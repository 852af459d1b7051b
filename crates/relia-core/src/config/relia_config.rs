//! Top-level relia configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CutSetAlgorithm, CutSetConfig, ObservabilityConfig, ProbabilityConfig, StatisticsConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RELIA_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReliaConfig {
    pub cutset: CutSetConfig,
    pub probability: ProbabilityConfig,
    pub statistics: StatisticsConfig,
    pub observability: ObservabilityConfig,
}

impl ReliaConfig {
    /// Load configuration from an optional TOML file, then apply `RELIA_*` overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing sections fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from a key lookup (the process environment in `load`).
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("RELIA_CUTSET_ALGORITHM") {
            if let Ok(v) = val.parse::<CutSetAlgorithm>() {
                self.cutset.algorithm = v;
            }
        }
        if let Some(val) = lookup("RELIA_MAX_PATHS") {
            if let Ok(v) = val.parse::<usize>() {
                self.cutset.max_paths = v;
            }
        }
        if let Some(val) = lookup("RELIA_MAX_CANDIDATES") {
            if let Ok(v) = val.parse::<usize>() {
                self.cutset.max_candidates = v;
            }
        }
        if let Some(val) = lookup("RELIA_MAX_EVENTS") {
            if let Ok(v) = val.parse::<usize>() {
                self.probability.max_events = v;
            }
        }
        if let Some(val) = lookup("RELIA_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("cutset.max_paths", self.cutset.max_paths),
            ("cutset.max_candidates", self.cutset.max_candidates),
            ("cutset.max_bdd_nodes", self.cutset.max_bdd_nodes),
            ("probability.max_events", self.probability.max_events),
        ];
        for (field, value) in limits {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        // The subset count 2^n must fit in a usize.
        if self.probability.max_events >= usize::BITS as usize {
            return Err(ConfigError::ValidationFailed {
                field: "probability.max_events".to_string(),
                message: format!("must be less than {}", usize::BITS),
            });
        }
        if self.statistics.thresholds.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "statistics.thresholds".to_string(),
                message: "at least one threshold is required".to_string(),
            });
        }
        if let Some(bad) = self
            .statistics
            .thresholds
            .iter()
            .find(|t| !(**t > 0.0 && **t < 1.0))
        {
            return Err(ConfigError::ValidationFailed {
                field: "statistics.thresholds".to_string(),
                message: format!("{bad} is not strictly between 0.0 and 1.0"),
            });
        }
        Ok(())
    }
}
