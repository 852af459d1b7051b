//! Dense component interning and bitset cut-set representation.

use rustc_hash::FxHashMap;

use relia_core::models::{ComponentId, CutSet};

/// Interns component ids into dense indices `0..len`.
#[derive(Debug, Clone, Default)]
pub struct ComponentArena {
    ids: Vec<ComponentId>,
    index: FxHashMap<ComponentId, usize>,
}

impl ComponentArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `id`, assigning the next free index on first sight.
    pub fn intern(&mut self, id: &ComponentId) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.ids.len();
        self.ids.push(id.clone());
        self.index.insert(id.clone(), idx);
        idx
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn id(&self, idx: usize) -> &ComponentId {
        &self.ids[idx]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// An empty set sized for every interned component.
    pub fn empty_set(&self) -> ComponentSet {
        ComponentSet::with_capacity(self.ids.len())
    }

    /// Set holding the given indices.
    pub fn set_of(&self, indices: impl IntoIterator<Item = usize>) -> ComponentSet {
        let mut set = self.empty_set();
        for idx in indices {
            set.insert(idx);
        }
        set
    }

    pub fn to_cut_set(&self, set: &ComponentSet) -> CutSet {
        set.iter().map(|idx| self.ids[idx].clone()).collect()
    }
}

/// Fixed-width bitset over arena indices.
///
/// Sets compared with each other must come from the same arena so their
/// word vectors have equal length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentSet {
    words: Vec<u64>,
}

impl ComponentSet {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(64)],
        }
    }

    pub fn insert(&mut self, idx: usize) {
        self.words[idx / 64] |= 1u64 << (idx % 64);
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.words
            .get(idx / 64)
            .is_some_and(|w| w & (1u64 << (idx % 64)) != 0)
    }

    /// A copy of this set with `idx` added.
    pub fn with(&self, idx: usize) -> Self {
        let mut set = self.clone();
        set.insert(idx);
        set
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn is_subset(&self, other: &ComponentSet) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & !b == 0)
    }

    pub fn intersects(&self, other: &ComponentSet) -> bool {
        self.words.iter().zip(&other.words).any(|(a, b)| a & b != 0)
    }

    /// Member indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            (0..64usize)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| w * 64 + bit)
        })
    }
}
