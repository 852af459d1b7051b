use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ComponentId, Path};

/// A set of components whose simultaneous failure blocks every source-sink path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutSet(BTreeSet<ComponentId>);

impl CutSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ComponentId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentId> {
        self.0.iter()
    }

    pub fn is_subset(&self, other: &CutSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Whether this set contains at least one intermediate component of `path`.
    pub fn blocks(&self, path: &Path, source: &ComponentId, sink: &ComponentId) -> bool {
        path.components(source, sink).any(|id| self.0.contains(id))
    }
}

impl<S: Into<ComponentId>> FromIterator<S> for CutSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for CutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}")?;
        }
        f.write_str("}")
    }
}

/// A deduplicated family of cut sets in canonical order (size, then members).
///
/// Canonical ordering makes families produced by different strategies
/// directly comparable with `==`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CutSet>", into = "Vec<CutSet>")]
pub struct CutSetFamily(Vec<CutSet>);

impl CutSetFamily {
    pub fn new<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = CutSet>,
    {
        let mut sets: Vec<CutSet> = sets.into_iter().collect();
        sets.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        sets.dedup();
        Self(sets)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CutSet> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CutSet] {
        &self.0
    }

    pub fn contains(&self, set: &CutSet) -> bool {
        self.0.contains(set)
    }

    /// Every component referenced by any cut set.
    pub fn components(&self) -> BTreeSet<&ComponentId> {
        self.0.iter().flat_map(CutSet::iter).collect()
    }

    /// Size of the smallest cut set (the system's order of redundancy).
    pub fn min_order(&self) -> Option<usize> {
        self.0.first().map(CutSet::len)
    }

    /// No member is a subset of another distinct member.
    pub fn is_minimal(&self) -> bool {
        self.0.iter().enumerate().all(|(i, a)| {
            self.0
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_subset(b))
        })
    }

    /// Every cut set intersects the intermediate components of every path.
    pub fn blocks_every_path(
        &self,
        paths: &[Path],
        source: &ComponentId,
        sink: &ComponentId,
    ) -> bool {
        self.0
            .iter()
            .all(|cut| paths.iter().all(|path| cut.blocks(path, source, sink)))
    }
}

impl IntoIterator for CutSetFamily {
    type Item = CutSet;
    type IntoIter = std::vec::IntoIter<CutSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CutSetFamily {
    type Item = &'a CutSet;
    type IntoIter = std::slice::Iter<'a, CutSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<CutSet> for CutSetFamily {
    fn from_iter<I: IntoIterator<Item = CutSet>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<CutSet>> for CutSetFamily {
    fn from(sets: Vec<CutSet>) -> Self {
        Self::new(sets)
    }
}

impl From<CutSetFamily> for Vec<CutSet> {
    fn from(family: CutSetFamily) -> Self {
        family.0
    }
}
