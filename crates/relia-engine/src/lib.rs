//! # relia-engine
//!
//! Single entry point over the workspace: builds the configured cut-set
//! strategy and calculator from a [`ReliaConfig`] and runs whole-system
//! analyses.

pub mod analysis;
pub mod engine;

pub use analysis::SystemAnalysis;
pub use engine::ReliabilityEngine;

pub use relia_core::ReliaConfig;
