//! System unreliability from minimal cut sets.

use std::collections::BTreeSet;

use relia_core::config::{defaults, ProbabilityConfig, UnreliabilityMethod};
use relia_core::constants::FAILURE_SYMBOL_PREFIX;
use relia_core::errors::{ProbabilityError, ReliaResult};
use relia_core::models::{ComponentId, CutSet, CutSetFamily, ProbabilityTable};

use crate::inclusion_exclusion::{inclusion_exclusion, inclusion_exclusion_with};
use crate::symbolic::Expr;

/// Failure symbol of a component, e.g. `F_pump`.
pub fn failure_symbol(id: &ComponentId) -> String {
    format!("{FAILURE_SYMBOL_PREFIX}{id}")
}

/// Inclusion-exclusion over cut-set failure events.
///
/// A cut set's failure event occurs when every member has failed, so its
/// probability is the product of the members' failure probabilities. The
/// system fails when any minimal cut set fails.
#[derive(Debug, Clone)]
pub struct UnreliabilityCalculator {
    max_events: usize,
    method: UnreliabilityMethod,
}

impl UnreliabilityCalculator {
    pub fn new() -> Self {
        Self {
            max_events: defaults::DEFAULT_MAX_EVENTS,
            method: UnreliabilityMethod::default(),
        }
    }

    pub fn from_config(config: &ProbabilityConfig) -> Self {
        Self {
            max_events: config.max_events,
            method: config.method,
        }
    }

    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }

    pub fn with_method(mut self, method: UnreliabilityMethod) -> Self {
        self.method = method;
        self
    }

    pub fn max_events(&self) -> usize {
        self.max_events
    }

    pub fn method(&self) -> UnreliabilityMethod {
        self.method
    }

    /// Probability of the union of independent events. Empty input gives 0.
    pub fn union_probability(&self, probabilities: &[f64]) -> ReliaResult<f64> {
        Ok(inclusion_exclusion(probabilities, self.max_events)?)
    }

    /// The same expansion over symbolic event probabilities.
    pub fn symbolic_union_probability(&self, expressions: &[Expr]) -> ReliaResult<Expr> {
        Ok(inclusion_exclusion(expressions, self.max_events)?)
    }

    /// Product of the members' failure probabilities.
    pub fn cut_probability(
        &self,
        cut: &CutSet,
        probabilities: &ProbabilityTable,
    ) -> Result<f64, ProbabilityError> {
        cut.iter()
            .map(|id| probabilities.probability(id.as_str()))
            .product()
    }

    /// Unreliability with cut-set events treated as independent: every
    /// intersection is the product of the cut probabilities involved.
    pub fn system_unreliability(
        &self,
        cut_sets: &CutSetFamily,
        probabilities: &ProbabilityTable,
    ) -> ReliaResult<f64> {
        let cut_probabilities = cut_sets
            .iter()
            .map(|cut| self.cut_probability(cut, probabilities))
            .collect::<Result<Vec<f64>, _>>()?;
        let unreliability = self.union_probability(&cut_probabilities)?;
        tracing::debug!(
            cut_sets = cut_sets.len(),
            unreliability,
            "cut-independence unreliability"
        );
        Ok(unreliability)
    }

    /// Unreliability where the intersection of several cut events is the
    /// product over the union of their members. Exact for independent
    /// components even when cut sets share members.
    pub fn exact_system_unreliability(
        &self,
        cut_sets: &CutSetFamily,
        probabilities: &ProbabilityTable,
    ) -> ReliaResult<f64> {
        let mut ids: Vec<&ComponentId> = Vec::new();
        let mut p: Vec<f64> = Vec::new();
        let mut members: Vec<Vec<usize>> = Vec::with_capacity(cut_sets.len());
        for cut in cut_sets {
            let mut indices = Vec::with_capacity(cut.len());
            for id in cut.iter() {
                let idx = match ids.iter().position(|known| *known == id) {
                    Some(idx) => idx,
                    None => {
                        p.push(probabilities.probability(id.as_str())?);
                        ids.push(id);
                        ids.len() - 1
                    }
                };
                indices.push(idx);
            }
            members.push(indices);
        }

        let unreliability = inclusion_exclusion_with(members.len(), self.max_events, |subset| {
            let union: BTreeSet<usize> = subset
                .iter()
                .flat_map(|&event| members[event].iter().copied())
                .collect();
            union.iter().map(|&idx| p[idx]).product::<f64>()
        })?;
        tracing::debug!(
            cut_sets = cut_sets.len(),
            unreliability,
            "shared-component unreliability"
        );
        Ok(unreliability)
    }

    /// Unreliability by the configured method.
    pub fn unreliability(
        &self,
        cut_sets: &CutSetFamily,
        probabilities: &ProbabilityTable,
    ) -> ReliaResult<f64> {
        match self.method {
            UnreliabilityMethod::CutIndependence => {
                self.system_unreliability(cut_sets, probabilities)
            }
            UnreliabilityMethod::SharedComponents => {
                self.exact_system_unreliability(cut_sets, probabilities)
            }
        }
    }

    /// Symbolic cut-independence unreliability over one `F_<id>` symbol per component.
    pub fn symbolic_system_unreliability(&self, cut_sets: &CutSetFamily) -> ReliaResult<Expr> {
        let events: Vec<Expr> = cut_sets
            .iter()
            .map(|cut| Expr::product(cut.iter().map(|id| Expr::symbol(failure_symbol(id)))))
            .collect();
        self.symbolic_union_probability(&events)
    }

    /// Evaluate a symbolic result, binding each `F_<id>` to that component's probability.
    pub fn evaluate(
        &self,
        expression: &Expr,
        probabilities: &ProbabilityTable,
    ) -> ReliaResult<f64> {
        let lookup = |symbol: &str| {
            symbol
                .strip_prefix(FAILURE_SYMBOL_PREFIX)
                .and_then(|id| probabilities.get(id))
        };
        Ok(expression.eval_with(&lookup)?)
    }
}

impl Default for UnreliabilityCalculator {
    fn default() -> Self {
        Self::new()
    }
}
