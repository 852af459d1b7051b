//! JSON system definitions: components plus connections.
//!
//! ```json
//! {
//!   "name": "Pump station",
//!   "components": [
//!     { "id": "P1", "name": "Pump 1", "failure_rate": 0.01 },
//!     { "id": "V1", "distribution": { "type": "weibull", "shape": 1.5, "scale": 800.0 } }
//!   ],
//!   "connections": [ { "from": "source", "to": "P1" }, { "from": "P1", "to": "sink" } ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use relia_core::errors::{GraphError, ReliaResult};
use relia_core::models::FailureDistribution;

use crate::component::Component;
use crate::system_graph::SystemGraph;

/// Failure rate assumed for components that specify neither a rate nor a distribution.
pub const DEFAULT_FAILURE_RATE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,
    #[serde(default)]
    pub connections: Vec<ConnectionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shorthand for an exponential distribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<FailureDistribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDefinition {
    pub from: String,
    pub to: String,
}

impl ComponentDefinition {
    fn resolve_distribution(&self) -> ReliaResult<FailureDistribution> {
        let dist = match (self.failure_rate, self.distribution) {
            (Some(_), Some(_)) => {
                return Err(GraphError::InvalidDefinition {
                    reason: format!(
                        "component {} sets both failure_rate and distribution",
                        self.id
                    ),
                }
                .into())
            }
            (Some(rate), None) => FailureDistribution::exponential(rate)?,
            (None, Some(dist)) => {
                dist.validate()?;
                dist
            }
            (None, None) => FailureDistribution::exponential(DEFAULT_FAILURE_RATE)?,
        };
        Ok(dist)
    }
}

impl SystemGraph {
    /// Build a system from a definition. Components are added before connections.
    pub fn from_definition(definition: &SystemDefinition) -> ReliaResult<Self> {
        let mut system = SystemGraph::new();
        if let Some(name) = &definition.name {
            system = system.with_name(name.clone());
        }

        for def in &definition.components {
            let mut component = Component::new(def.id.as_str())
                .with_distribution(def.resolve_distribution()?);
            if let Some(name) = &def.name {
                component = component.with_name(name.clone());
            }
            if let Some(description) = &def.description {
                component = component.with_description(description.clone());
            }
            system.add_component(component)?;
        }

        for conn in &definition.connections {
            system.add_connection(&conn.from, &conn.to)?;
        }

        tracing::debug!(
            components = system.component_count(),
            connections = system.connection_count(),
            "system built from definition"
        );
        Ok(system)
    }

    /// Snapshot of this system as a definition.
    pub fn to_definition(&self) -> SystemDefinition {
        SystemDefinition {
            name: self.name().map(str::to_string),
            components: self
                .components()
                .map(|c| ComponentDefinition {
                    id: c.id.to_string(),
                    name: Some(c.name.clone()),
                    description: c.description.clone(),
                    failure_rate: None,
                    distribution: c.distribution,
                })
                .collect(),
            connections: self
                .connections()
                .into_iter()
                .map(|(from, to)| ConnectionDefinition {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }

    /// Parse a JSON system definition.
    pub fn from_json(json: &str) -> ReliaResult<Self> {
        let definition: SystemDefinition =
            serde_json::from_str(json).map_err(|e| GraphError::InvalidDefinition {
                reason: e.to_string(),
            })?;
        Self::from_definition(&definition)
    }

    /// Render this system as a pretty-printed JSON definition.
    pub fn to_json(&self) -> ReliaResult<String> {
        serde_json::to_string_pretty(&self.to_definition()).map_err(|e| {
            GraphError::InvalidDefinition {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
