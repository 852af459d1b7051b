//! Component importance measures derived from the cut-set unreliability.

use relia_core::constants::UNRELIABILITY_EPSILON;
use relia_core::errors::ReliaResult;
use relia_core::models::{ComponentId, CutSetFamily, ProbabilityTable};

use crate::unreliability::UnreliabilityCalculator;

/// Importance of one component at a fixed set of failure probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentImportance {
    pub component: ComponentId,
    /// System unreliability with the component failed minus with it working.
    pub birnbaum: f64,
    /// Birnbaum scaled by component over system unreliability.
    pub criticality: f64,
}

/// Evaluates importance measures against one cut-set family.
pub struct ImportanceAnalyzer<'a> {
    calculator: &'a UnreliabilityCalculator,
    cut_sets: &'a CutSetFamily,
}

impl<'a> ImportanceAnalyzer<'a> {
    pub fn new(calculator: &'a UnreliabilityCalculator, cut_sets: &'a CutSetFamily) -> Self {
        Self {
            calculator,
            cut_sets,
        }
    }

    /// ∂U/∂qᵢ: the unreliability with component `id` certainly failed minus
    /// with it certainly working.
    pub fn birnbaum(&self, probabilities: &ProbabilityTable, id: &ComponentId) -> ReliaResult<f64> {
        let failed = probabilities.with_override(id, 1.0)?;
        let working = probabilities.with_override(id, 0.0)?;
        let u_failed = self.calculator.unreliability(self.cut_sets, &failed)?;
        let u_working = self.calculator.unreliability(self.cut_sets, &working)?;
        Ok(u_failed - u_working)
    }

    /// Birnbaum × qᵢ / U. Zero when the system unreliability is negligible.
    pub fn criticality(
        &self,
        probabilities: &ProbabilityTable,
        id: &ComponentId,
    ) -> ReliaResult<f64> {
        let system = self.calculator.unreliability(self.cut_sets, probabilities)?;
        let birnbaum = self.birnbaum(probabilities, id)?;
        Ok(scale_criticality(birnbaum, probabilities.probability(id.as_str())?, system))
    }

    /// Both measures for every component in `probabilities`, in id order.
    pub fn measures(
        &self,
        probabilities: &ProbabilityTable,
    ) -> ReliaResult<Vec<ComponentImportance>> {
        let system = self.calculator.unreliability(self.cut_sets, probabilities)?;
        probabilities
            .iter()
            .map(|(id, q)| -> ReliaResult<ComponentImportance> {
                let birnbaum = self.birnbaum(probabilities, id)?;
                Ok(ComponentImportance {
                    component: id.clone(),
                    birnbaum,
                    criticality: scale_criticality(birnbaum, q, system),
                })
            })
            .collect()
    }
}

fn scale_criticality(birnbaum: f64, component: f64, system: f64) -> f64 {
    if system.abs() < UNRELIABILITY_EPSILON {
        0.0
    } else {
        birnbaum * component / system
    }
}
