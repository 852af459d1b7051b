//! # relia-stats
//!
//! Statistics over a reliability-vs-time curve produced by an external
//! sampler: mean time to failure, point availability, and a threshold
//! summary.

pub mod statistics;
pub mod summary;

pub use statistics::ReliabilityStatistics;
pub use summary::{ReliabilitySummary, SummaryValue, ThresholdCrossing};
