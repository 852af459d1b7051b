//! ReliabilityEngine: configuration-driven facade over the analysis crates.

use std::path::Path;

use relia_calc::{ComponentImportance, ImportanceAnalyzer, UnreliabilityCalculator};
use relia_core::config::ReliaConfig;
use relia_core::errors::ReliaResult;
use relia_core::models::{CutSetFamily, ProbabilityTable, ReliabilityCurve};
use relia_core::traits::{ICutSetStrategy, IPathSource};
use relia_cutset::{compare_strategies, BddStrategy, MocusStrategy, StrategyComparison};
use relia_graph::SystemGraph;
use relia_stats::ReliabilityStatistics;

use crate::analysis::SystemAnalysis;

pub struct ReliabilityEngine {
    config: ReliaConfig,
    strategy: Box<dyn ICutSetStrategy>,
    calculator: UnreliabilityCalculator,
}

impl ReliabilityEngine {
    pub fn new(config: ReliaConfig) -> Self {
        let strategy = relia_cutset::strategy_for(&config.cutset);
        let calculator = UnreliabilityCalculator::from_config(&config.probability);
        tracing::debug!(
            algorithm = %config.cutset.algorithm,
            method = ?config.probability.method,
            "reliability engine configured"
        );
        Self {
            config,
            strategy,
            calculator,
        }
    }

    /// Load configuration (file, then `RELIA_*` overrides), validate it,
    /// install the tracing subscriber it describes, and build an engine.
    pub fn from_config_file(path: Option<&Path>) -> ReliaResult<Self> {
        let config = ReliaConfig::load(path)?;
        relia_core::tracing::init_tracing_with_config(&config.observability);
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ReliaConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn calculator(&self) -> &UnreliabilityCalculator {
        &self.calculator
    }

    /// Minimal cut sets using the configured strategy.
    pub fn minimal_cut_sets(&self, graph: &dyn IPathSource) -> ReliaResult<CutSetFamily> {
        self.strategy.find_minimal_cut_sets(graph)
    }

    /// System unreliability by the configured method.
    pub fn unreliability(
        &self,
        cut_sets: &CutSetFamily,
        probabilities: &ProbabilityTable,
    ) -> ReliaResult<f64> {
        self.calculator.unreliability(cut_sets, probabilities)
    }

    /// Cut sets, component probabilities at `time`, numeric and symbolic
    /// unreliability for `system`.
    pub fn analyze(&self, system: &SystemGraph, time: f64) -> ReliaResult<SystemAnalysis> {
        let name = system.name().unwrap_or("unnamed");
        let span = tracing::info_span!("analyze", system = name, time);
        let _guard = span.enter();

        let cut_sets = self.minimal_cut_sets(system)?;
        let probabilities = system.failure_probabilities(time)?;
        let unreliability = self.unreliability(&cut_sets, &probabilities)?;
        let formula = self.calculator.symbolic_system_unreliability(&cut_sets)?;

        tracing::info!(
            cut_sets = cut_sets.len(),
            unreliability,
            "system analysed"
        );
        Ok(SystemAnalysis {
            time,
            cut_sets,
            probabilities,
            unreliability,
            reliability: 1.0 - unreliability,
            formula,
        })
    }

    /// Birnbaum and criticality importance of every component in `probabilities`.
    pub fn importance(
        &self,
        cut_sets: &CutSetFamily,
        probabilities: &ProbabilityTable,
    ) -> ReliaResult<Vec<ComponentImportance>> {
        ImportanceAnalyzer::new(&self.calculator, cut_sets).measures(probabilities)
    }

    /// Analytic reliability of `system` sampled at `times` (strictly increasing).
    pub fn reliability_curve(
        &self,
        system: &SystemGraph,
        times: &[f64],
    ) -> ReliaResult<ReliabilityCurve> {
        let cut_sets = self.minimal_cut_sets(system)?;
        let mut reliability = Vec::with_capacity(times.len());
        let mut floor = 1.0_f64;
        for &t in times {
            let probabilities = system.failure_probabilities(t)?;
            let r = (1.0 - self.unreliability(&cut_sets, &probabilities)?).clamp(0.0, 1.0);
            // Running minimum absorbs rounding noise; the exact curve never rises.
            floor = floor.min(r);
            reliability.push(floor);
        }
        Ok(ReliabilityCurve::new(times.to_vec(), reliability)?)
    }

    /// Statistics over `curve` using the configured thresholds.
    pub fn statistics<'a>(&self, curve: &'a ReliabilityCurve) -> ReliabilityStatistics<'a> {
        ReliabilityStatistics::with_config(curve, &self.config.statistics)
    }

    /// Run MOCUS and BDD, both with the configured guards, over `graph`.
    pub fn compare_strategies(&self, graph: &dyn IPathSource) -> StrategyComparison {
        let mocus = MocusStrategy::from_config(&self.config.cutset);
        let bdd = BddStrategy::from_config(&self.config.cutset);
        compare_strategies(graph, &[&mocus, &bdd])
    }
}

impl Default for ReliabilityEngine {
    fn default() -> Self {
        Self::new(ReliaConfig::default())
    }
}
