use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ComponentId;
use crate::errors::ProbabilityError;

/// Component failure probabilities, each in [0, 1].
///
/// Looking up an absent component is an error, never a silent default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<ComponentId, f64>",
    into = "BTreeMap<ComponentId, f64>"
)]
pub struct ProbabilityTable(BTreeMap<ComponentId, f64>);

impl ProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(id, probability)` pairs, validating each value.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ProbabilityError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<ComponentId>,
    {
        let mut table = Self::new();
        for (id, p) in pairs {
            table.insert(id, p)?;
        }
        Ok(table)
    }

    /// Insert or replace a probability. Rejects values outside [0, 1] (and NaN).
    pub fn insert(
        &mut self,
        id: impl Into<ComponentId>,
        probability: f64,
    ) -> Result<Option<f64>, ProbabilityError> {
        let id = id.into();
        if !(0.0..=1.0).contains(&probability) {
            return Err(ProbabilityError::InvalidProbability {
                component: id.to_string(),
                value: probability,
            });
        }
        Ok(self.0.insert(id, probability))
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.0.get(id).copied()
    }

    /// Probability of `id`, or `MissingProbability` carrying the id.
    pub fn probability(&self, id: &str) -> Result<f64, ProbabilityError> {
        self.get(id).ok_or_else(|| ProbabilityError::MissingProbability {
            component: id.to_string(),
        })
    }

    /// Copy of this table with one component's probability replaced.
    pub fn with_override(
        &self,
        id: &ComponentId,
        probability: f64,
    ) -> Result<Self, ProbabilityError> {
        let mut table = self.clone();
        table.insert(id.clone(), probability)?;
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, f64)> {
        self.0.iter().map(|(id, p)| (id, *p))
    }
}

impl TryFrom<BTreeMap<ComponentId, f64>> for ProbabilityTable {
    type Error = ProbabilityError;

    fn try_from(map: BTreeMap<ComponentId, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(map)
    }
}

impl From<ProbabilityTable> for BTreeMap<ComponentId, f64> {
    fn from(table: ProbabilityTable) -> Self {
        table.0
    }
}
