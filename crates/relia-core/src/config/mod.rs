//! Configuration system for relia.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod cutset_config;
pub mod defaults;
pub mod observability_config;
pub mod probability_config;
pub mod relia_config;
pub mod statistics_config;

pub use cutset_config::{CutSetAlgorithm, CutSetConfig, DirectPathPolicy};
pub use observability_config::ObservabilityConfig;
pub use probability_config::{ProbabilityConfig, UnreliabilityMethod};
pub use relia_config::ReliaConfig;
pub use statistics_config::StatisticsConfig;
