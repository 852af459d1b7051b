//! # relia-cutset
//!
//! Minimal cut-set enumeration over source-sink path enumerations.
//! Two interchangeable strategies implement [`ICutSetStrategy`]:
//! [`MocusStrategy`] (path-product construction) and [`BddStrategy`]
//! (binary decision diagram over the structure function). Both return the
//! identical canonical [`CutSetFamily`] for any graph.

pub mod arena;
pub mod bdd;
pub mod comparison;
pub mod minimize;
pub mod mocus;
pub mod paths;

pub use arena::{ComponentArena, ComponentSet};
pub use bdd::BddStrategy;
pub use comparison::{compare_strategies, StrategyComparison, StrategyRun};
pub use minimize::minimal_family;
pub use mocus::MocusStrategy;

use relia_core::config::{CutSetAlgorithm, CutSetConfig};
use relia_core::models::CutSetFamily;
use relia_core::traits::ICutSetStrategy;

/// The strategy selected by `config.algorithm`, carrying the configured guards.
pub fn strategy_for(config: &CutSetConfig) -> Box<dyn ICutSetStrategy> {
    match config.algorithm {
        CutSetAlgorithm::Mocus => Box::new(MocusStrategy::from_config(config)),
        CutSetAlgorithm::Bdd => Box::new(BddStrategy::from_config(config)),
    }
}

/// Convert interned sets back to a canonical family.
pub(crate) fn to_family(arena: &ComponentArena, sets: &[ComponentSet]) -> CutSetFamily {
    sets.iter().map(|s| arena.to_cut_set(s)).collect()
}
