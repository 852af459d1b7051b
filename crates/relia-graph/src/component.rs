use serde::{Deserialize, Serialize};

use relia_core::errors::GraphError;
use relia_core::models::{ComponentId, FailureDistribution};

/// A component node of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub description: Option<String>,
    pub distribution: Option<FailureDistribution>,
}

impl Component {
    /// A component named after its id, with no description or distribution.
    pub fn new(id: impl Into<ComponentId>) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            description: None,
            distribution: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_distribution(mut self, distribution: FailureDistribution) -> Self {
        self.distribution = Some(distribution);
        self
    }

    /// Probability this component has failed by time `t`.
    pub fn probability_of_failure(&self, t: f64) -> Result<f64, GraphError> {
        self.distribution
            .as_ref()
            .map(|d| d.probability_of_failure(t))
            .ok_or_else(|| GraphError::MissingDistribution {
                id: self.id.to_string(),
            })
    }
}
