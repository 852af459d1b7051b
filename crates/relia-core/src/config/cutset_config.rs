//! Cut-set engine configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which strategy enumerates minimal cut sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutSetAlgorithm {
    /// Path-product construction.
    #[default]
    Mocus,
    /// Binary decision diagram over the structure function.
    Bdd,
}

impl fmt::Display for CutSetAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mocus => f.write_str("mocus"),
            Self::Bdd => f.write_str("bdd"),
        }
    }
}

impl FromStr for CutSetAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mocus" => Ok(Self::Mocus),
            "bdd" => Ok(Self::Bdd),
            other => Err(format!("unknown cut-set algorithm '{other}'")),
        }
    }
}

/// How a path with no intermediate components (a direct source-sink edge) is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectPathPolicy {
    /// The direct path contributes no constraint; the remaining paths are processed.
    #[default]
    Ignore,
    /// A direct path can never be cut, so the system has no cut sets at all.
    Uncuttable,
}

/// Cut-set engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CutSetConfig {
    /// Strategy used by `strategy_for`.
    pub algorithm: CutSetAlgorithm,
    /// Maximum number of source-sink paths enumerated before failing.
    pub max_paths: usize,
    /// Maximum number of candidate sets held during construction.
    pub max_candidates: usize,
    /// Maximum number of BDD nodes.
    pub max_bdd_nodes: usize,
    /// Treatment of direct source-sink edges.
    pub direct_path_policy: DirectPathPolicy,
}

impl Default for CutSetConfig {
    fn default() -> Self {
        Self {
            algorithm: CutSetAlgorithm::default(),
            max_paths: defaults::DEFAULT_MAX_PATHS,
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            max_bdd_nodes: defaults::DEFAULT_MAX_BDD_NODES,
            direct_path_policy: DirectPathPolicy::default(),
        }
    }
}
