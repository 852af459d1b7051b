//! Unreliability calculator configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Formula used to combine cut-set failure events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreliabilityMethod {
    /// Cut-set events treated as independent: intersections multiply cut probabilities.
    #[default]
    CutIndependence,
    /// Intersections multiply over the union of member components.
    SharedComponents,
}

/// Unreliability calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityConfig {
    /// Maximum number of events in one inclusion-exclusion expansion.
    pub max_events: usize,
    /// Formula used by `UnreliabilityCalculator::unreliability`.
    pub method: UnreliabilityMethod,
}

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self {
            max_events: defaults::DEFAULT_MAX_EVENTS,
            method: UnreliabilityMethod::default(),
        }
    }
}
