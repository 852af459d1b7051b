//! Minimality reduction: deduplicate, then drop every proper superset.

use relia_core::models::{CutSet, CutSetFamily};

use crate::arena::ComponentSet;

/// Reduce candidate sets to the minimal ones.
///
/// Candidates are deduplicated and visited in ascending size; a candidate is
/// kept only if no already-kept set is a subset of it. Equal-size distinct
/// sets are never subsets of each other, so both survive. O(m²) in the
/// number of distinct candidates.
pub fn minimize(mut candidates: Vec<ComponentSet>) -> Vec<ComponentSet> {
    candidates.sort_unstable();
    candidates.dedup();
    candidates.sort_by_cached_key(|s| s.len());

    let mut kept: Vec<ComponentSet> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !kept.iter().any(|k| k.is_subset(&candidate)) {
            kept.push(candidate);
        }
    }
    kept
}

/// The same reduction over id-keyed cut sets.
pub fn minimal_family<I>(candidates: I) -> CutSetFamily
where
    I: IntoIterator<Item = CutSet>,
{
    let mut sets: Vec<CutSet> = candidates.into_iter().collect();
    sets.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    sets.dedup();

    let mut kept: Vec<CutSet> = Vec::with_capacity(sets.len());
    for candidate in sets {
        if !kept.iter().any(|k| k.is_subset(&candidate)) {
            kept.push(candidate);
        }
    }
    CutSetFamily::new(kept)
}
