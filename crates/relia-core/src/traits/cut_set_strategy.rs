use crate::errors::ReliaResult;
use crate::models::CutSetFamily;

use super::IPathSource;

/// Minimal cut-set enumeration.
///
/// Implementations are interchangeable: for the same graph every strategy
/// returns the same family.
pub trait ICutSetStrategy: Send + Sync {
    /// Short name used in logs and comparison reports.
    fn name(&self) -> &'static str;

    /// Find every minimal cut set between the source and sink of `graph`.
    fn find_minimal_cut_sets(&self, graph: &dyn IPathSource) -> ReliaResult<CutSetFamily>;
}
