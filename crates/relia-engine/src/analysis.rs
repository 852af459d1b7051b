use serde::Serialize;

use relia_calc::Expr;
use relia_core::models::{CutSetFamily, ProbabilityTable};

/// Result of analysing one system at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct SystemAnalysis {
    pub time: f64,
    pub cut_sets: CutSetFamily,
    pub probabilities: ProbabilityTable,
    pub unreliability: f64,
    pub reliability: f64,
    /// Symbolic unreliability over `F_<id>` failure symbols.
    #[serde(serialize_with = "serialize_display")]
    pub formula: Expr,
}

fn serialize_display<S: serde::Serializer>(expr: &Expr, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(expr)
}
