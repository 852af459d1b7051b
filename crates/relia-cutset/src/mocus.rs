//! MOCUS: minimal cut sets by path-product construction.
//!
//! Every cut set must contain at least one component from every path, so the
//! family is the product of the paths' component sets, reduced to its
//! minimal members.

use relia_core::config::{defaults, CutSetConfig, DirectPathPolicy};
use relia_core::errors::{CutSetError, ReliaResult};
use relia_core::models::CutSetFamily;
use relia_core::traits::{ICutSetStrategy, IPathSource};

use crate::arena::ComponentSet;
use crate::minimize::minimize;
use crate::paths::{prepare_paths, PreparedPaths};
use crate::to_family;

/// Path-product cut-set strategy.
#[derive(Debug, Clone)]
pub struct MocusStrategy {
    max_paths: usize,
    max_candidates: usize,
    direct_path_policy: DirectPathPolicy,
}

impl MocusStrategy {
    pub fn new() -> Self {
        Self {
            max_paths: defaults::DEFAULT_MAX_PATHS,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            direct_path_policy: DirectPathPolicy::default(),
        }
    }

    pub fn from_config(config: &CutSetConfig) -> Self {
        Self {
            max_paths: config.max_paths,
            max_candidates: config.max_candidates,
            direct_path_policy: config.direct_path_policy,
        }
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_direct_path_policy(mut self, policy: DirectPathPolicy) -> Self {
        self.direct_path_policy = policy;
        self
    }

    fn expand(&self, prepared: &PreparedPaths) -> Result<Vec<ComponentSet>, CutSetError> {
        let arena = &prepared.arena;
        let (first, rest) = match prepared.paths.split_first() {
            Some(split) => split,
            None => return Ok(Vec::new()),
        };

        let mut family: Vec<ComponentSet> =
            first.iter().map(|&idx| arena.set_of([idx])).collect();

        for path in rest {
            let attempted = family.len().saturating_mul(path.len());
            if attempted > self.max_candidates {
                return Err(CutSetError::CandidateLimitExceeded {
                    limit: self.max_candidates,
                    attempted,
                });
            }

            let path_set = arena.set_of(path.iter().copied());
            let mut next = Vec::with_capacity(attempted);
            for set in family {
                // A set that already blocks this path only grows into supersets of itself.
                if set.intersects(&path_set) {
                    next.push(set);
                    continue;
                }
                next.extend(path.iter().map(|&idx| set.with(idx)));
            }
            family = minimize(next);
        }

        Ok(minimize(family))
    }
}

impl Default for MocusStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ICutSetStrategy for MocusStrategy {
    fn name(&self) -> &'static str {
        "mocus"
    }

    fn find_minimal_cut_sets(&self, graph: &dyn IPathSource) -> ReliaResult<CutSetFamily> {
        let Some(prepared) = prepare_paths(graph, self.max_paths, self.direct_path_policy)? else {
            return Ok(CutSetFamily::empty());
        };

        let sets = self.expand(&prepared)?;
        tracing::debug!(
            paths = prepared.paths.len(),
            cut_sets = sets.len(),
            "mocus complete"
        );
        Ok(to_family(&prepared.arena, &sets))
    }
}
