//! # relia-calc
//!
//! Converts minimal cut sets plus component failure probabilities into system
//! unreliability. One generic inclusion-exclusion routine serves both `f64`
//! probabilities and symbolic [`Expr`] values.

pub mod importance;
pub mod inclusion_exclusion;
pub mod symbolic;
pub mod unreliability;
pub mod value;

pub use importance::{ComponentImportance, ImportanceAnalyzer};
pub use inclusion_exclusion::{inclusion_exclusion, inclusion_exclusion_with, Combinations};
pub use symbolic::Expr;
pub use unreliability::UnreliabilityCalculator;
pub use value::ProbabilityValue;
