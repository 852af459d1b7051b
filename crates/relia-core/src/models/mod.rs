//! Data model shared by the graph adapter, cut-set engine, calculator, and statistics.

pub mod component_id;
pub mod curve;
pub mod cut_set;
pub mod distribution;
pub mod path;
pub mod probability_table;

pub use component_id::ComponentId;
pub use curve::ReliabilityCurve;
pub use cut_set::{CutSet, CutSetFamily};
pub use distribution::FailureDistribution;
pub use path::Path;
pub use probability_table::ProbabilityTable;
