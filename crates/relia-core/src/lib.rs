//! # relia-core
//!
//! Foundation crate for the relia reliability engine.
//! Defines the shared types, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ReliaConfig;
pub use errors::{ReliaError, ReliaResult};
pub use models::{
    ComponentId, CutSet, CutSetFamily, FailureDistribution, Path, ProbabilityTable,
    ReliabilityCurve,
};
pub use traits::{ICutSetStrategy, IPathSource};
