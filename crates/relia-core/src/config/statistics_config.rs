use serde::{Deserialize, Serialize};

use super::defaults;

/// Reliability statistics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Reliability levels reported as `time_to_<percent>%`, in report order.
    pub thresholds: Vec<f64>,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            thresholds: defaults::DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}
