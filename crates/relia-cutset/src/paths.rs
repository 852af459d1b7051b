//! Path preparation shared by every strategy: enumeration guard, terminal
//! stripping, direct-path policy and component interning.

use relia_core::config::DirectPathPolicy;
use relia_core::errors::CutSetError;
use relia_core::traits::IPathSource;

use crate::arena::{ComponentArena, ComponentSet};

/// Component paths of a graph, interned.
#[derive(Debug, Clone)]
pub struct PreparedPaths {
    pub arena: ComponentArena,
    /// Component indices of each path, ascending, no duplicates.
    pub paths: Vec<Vec<usize>>,
}

impl PreparedPaths {
    /// Each path as a bitset, for intersection tests.
    pub fn path_sets(&self) -> Vec<ComponentSet> {
        self.paths
            .iter()
            .map(|p| self.arena.set_of(p.iter().copied()))
            .collect()
    }

    /// How many paths each component lies on, indexed by arena index.
    pub fn occurrence_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.arena.len()];
        for path in &self.paths {
            for &idx in path {
                counts[idx] += 1;
            }
        }
        counts
    }
}

/// Enumerate and intern the component paths of `graph`.
///
/// Returns `Ok(None)` when the minimal cut-set family is empty without
/// further work: no component path exists, or a direct source-sink path was
/// found under [`DirectPathPolicy::Uncuttable`].
pub fn prepare_paths(
    graph: &dyn IPathSource,
    max_paths: usize,
    policy: DirectPathPolicy,
) -> Result<Option<PreparedPaths>, CutSetError> {
    let source = graph.source();
    let sink = graph.sink();
    let mut arena = ComponentArena::new();
    let mut paths = Vec::new();
    let mut enumerated = 0usize;
    let mut direct = 0usize;

    for path in graph.simple_paths() {
        enumerated += 1;
        if enumerated > max_paths {
            return Err(CutSetError::PathLimitExceeded { limit: max_paths });
        }

        let mut indices: Vec<usize> = path
            .components(source, sink)
            .map(|id| arena.intern(id))
            .collect();
        if indices.is_empty() {
            direct += 1;
            tracing::warn!(policy = ?policy, "direct source-sink path found");
            if policy == DirectPathPolicy::Uncuttable {
                return Ok(None);
            }
            continue;
        }
        indices.sort_unstable();
        indices.dedup();
        paths.push(indices);
    }

    tracing::debug!(
        paths = enumerated,
        direct,
        components = arena.len(),
        "paths prepared"
    );

    if paths.is_empty() {
        return Ok(None);
    }
    Ok(Some(PreparedPaths { arena, paths }))
}
