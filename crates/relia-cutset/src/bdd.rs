//! BDD strategy: minimal cut sets from a reduced ordered binary decision
//! diagram of the system's success function.
//!
//! The success function is the OR over paths of the AND of their components
//! (a variable is true while its component works). Every root-to-FALSE path
//! of the diagram fixes some variables to false; those low-branch variables
//! form a cut set, and the minimal members of that collection are exactly the
//! minimal cut sets.

use rustc_hash::FxHashMap;

use relia_core::config::{defaults, CutSetConfig, DirectPathPolicy};
use relia_core::errors::{CutSetError, ReliaResult};
use relia_core::models::CutSetFamily;
use relia_core::traits::{ICutSetStrategy, IPathSource};

use crate::arena::ComponentSet;
use crate::minimize::minimize;
use crate::paths::{prepare_paths, PreparedPaths};
use crate::to_family;

type NodeId = usize;

const FALSE: NodeId = 0;
const TRUE: NodeId = 1;

/// Decision node. `level` is the variable's position in the ordering;
/// terminals sit below every variable.
#[derive(Debug, Clone, Copy)]
struct Node {
    level: usize,
    lo: NodeId,
    hi: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Op {
    And,
    Or,
}

/// Node store with a unique table and a memoised apply.
struct Bdd {
    nodes: Vec<Node>,
    unique: FxHashMap<(usize, NodeId, NodeId), NodeId>,
    computed: FxHashMap<(Op, NodeId, NodeId), NodeId>,
    max_nodes: usize,
}

impl Bdd {
    fn new(max_nodes: usize) -> Self {
        let terminal = |id| Node {
            level: usize::MAX,
            lo: id,
            hi: id,
        };
        Self {
            nodes: vec![terminal(FALSE), terminal(TRUE)],
            unique: FxHashMap::default(),
            computed: FxHashMap::default(),
            max_nodes,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn is_terminal(id: NodeId) -> bool {
        id <= TRUE
    }

    fn mk(&mut self, level: usize, lo: NodeId, hi: NodeId) -> Result<NodeId, CutSetError> {
        if lo == hi {
            return Ok(lo);
        }
        if let Some(&id) = self.unique.get(&(level, lo, hi)) {
            return Ok(id);
        }
        if self.nodes.len() >= self.max_nodes {
            return Err(CutSetError::BddNodeLimitExceeded {
                limit: self.max_nodes,
            });
        }
        let id = self.nodes.len();
        self.nodes.push(Node { level, lo, hi });
        self.unique.insert((level, lo, hi), id);
        Ok(id)
    }

    fn apply(&mut self, op: Op, a: NodeId, b: NodeId) -> Result<NodeId, CutSetError> {
        match op {
            Op::And => {
                if a == FALSE || b == FALSE {
                    return Ok(FALSE);
                }
                if a == TRUE {
                    return Ok(b);
                }
                if b == TRUE || a == b {
                    return Ok(a);
                }
            }
            Op::Or => {
                if a == TRUE || b == TRUE {
                    return Ok(TRUE);
                }
                if a == FALSE {
                    return Ok(b);
                }
                if b == FALSE || a == b {
                    return Ok(a);
                }
            }
        }

        // Both operations commute.
        let key = (op, a.min(b), a.max(b));
        if let Some(&id) = self.computed.get(&key) {
            return Ok(id);
        }

        let (na, nb) = (self.nodes[a], self.nodes[b]);
        let level = na.level.min(nb.level);
        let (a_lo, a_hi) = if na.level == level { (na.lo, na.hi) } else { (a, a) };
        let (b_lo, b_hi) = if nb.level == level { (nb.lo, nb.hi) } else { (b, b) };

        let lo = self.apply(op, a_lo, b_lo)?;
        let hi = self.apply(op, a_hi, b_hi)?;
        let id = self.mk(level, lo, hi)?;
        self.computed.insert(key, id);
        Ok(id)
    }

    /// Conjunction of the given variable levels.
    fn conjunction(&mut self, levels: &mut [usize]) -> Result<NodeId, CutSetError> {
        levels.sort_unstable_by(|a, b| b.cmp(a));
        let mut node = TRUE;
        for &level in levels.iter() {
            node = self.mk(level, FALSE, node)?;
        }
        Ok(node)
    }

    /// Low-branch level sets of every root-to-FALSE path.
    fn false_paths(&self, root: NodeId, max_paths: usize) -> Result<Vec<Vec<usize>>, CutSetError> {
        let mut out = Vec::new();
        let mut low = Vec::new();
        self.collect_false_paths(root, &mut low, &mut out, max_paths)?;
        Ok(out)
    }

    fn collect_false_paths(
        &self,
        node: NodeId,
        low: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
        max_paths: usize,
    ) -> Result<(), CutSetError> {
        if node == FALSE {
            if out.len() >= max_paths {
                return Err(CutSetError::CandidateLimitExceeded {
                    limit: max_paths,
                    attempted: out.len() + 1,
                });
            }
            out.push(low.clone());
            return Ok(());
        }
        if Self::is_terminal(node) {
            return Ok(());
        }
        let Node { level, lo, hi } = self.nodes[node];
        low.push(level);
        self.collect_false_paths(lo, low, out, max_paths)?;
        low.pop();
        self.collect_false_paths(hi, low, out, max_paths)
    }
}

/// Binary-decision-diagram cut-set strategy.
#[derive(Debug, Clone)]
pub struct BddStrategy {
    max_paths: usize,
    max_candidates: usize,
    max_nodes: usize,
    direct_path_policy: DirectPathPolicy,
}

impl BddStrategy {
    pub fn new() -> Self {
        Self {
            max_paths: defaults::DEFAULT_MAX_PATHS,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            max_nodes: defaults::DEFAULT_MAX_BDD_NODES,
            direct_path_policy: DirectPathPolicy::default(),
        }
    }

    pub fn from_config(config: &CutSetConfig) -> Self {
        Self {
            max_paths: config.max_paths,
            max_candidates: config.max_candidates,
            max_nodes: config.max_bdd_nodes,
            direct_path_policy: config.direct_path_policy,
        }
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_direct_path_policy(mut self, policy: DirectPathPolicy) -> Self {
        self.direct_path_policy = policy;
        self
    }

    /// Arena indices in variable order: most path occurrences first, ties by id.
    fn variable_order(prepared: &PreparedPaths) -> Vec<usize> {
        let counts = prepared.occurrence_counts();
        let mut order: Vec<usize> = (0..prepared.arena.len()).collect();
        order.sort_by(|&a, &b| {
            counts[b]
                .cmp(&counts[a])
                .then_with(|| prepared.arena.id(a).cmp(prepared.arena.id(b)))
        });
        order
    }

    fn solve(&self, prepared: &PreparedPaths) -> Result<(Vec<ComponentSet>, usize), CutSetError> {
        let order = Self::variable_order(prepared);
        let mut level_of = vec![0; order.len()];
        for (level, &idx) in order.iter().enumerate() {
            level_of[idx] = level;
        }

        let mut bdd = Bdd::new(self.max_nodes);
        let mut success = FALSE;
        for path in &prepared.paths {
            let mut levels: Vec<usize> = path.iter().map(|&idx| level_of[idx]).collect();
            let term = bdd.conjunction(&mut levels)?;
            success = bdd.apply(Op::Or, success, term)?;
        }

        let cuts = bdd
            .false_paths(success, self.max_candidates)?
            .into_iter()
            .map(|levels| prepared.arena.set_of(levels.into_iter().map(|l| order[l])))
            .collect();
        Ok((minimize(cuts), bdd.len()))
    }
}

impl Default for BddStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ICutSetStrategy for BddStrategy {
    fn name(&self) -> &'static str {
        "bdd"
    }

    fn find_minimal_cut_sets(&self, graph: &dyn IPathSource) -> ReliaResult<CutSetFamily> {
        let Some(prepared) = prepare_paths(graph, self.max_paths, self.direct_path_policy)? else {
            return Ok(CutSetFamily::empty());
        };

        let (sets, nodes) = self.solve(&prepared)?;
        tracing::debug!(
            paths = prepared.paths.len(),
            nodes,
            cut_sets = sets.len(),
            "bdd complete"
        );
        Ok(to_family(&prepared.arena, &sets))
    }
}
