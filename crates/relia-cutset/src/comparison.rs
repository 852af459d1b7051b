//! Side-by-side runs of several cut-set strategies over one graph.

use std::time::{Duration, Instant};

use relia_core::errors::ReliaResult;
use relia_core::models::CutSetFamily;
use relia_core::traits::{ICutSetStrategy, IPathSource};

/// Outcome of a single strategy run.
#[derive(Debug)]
pub struct StrategyRun {
    pub name: &'static str,
    pub elapsed: Duration,
    pub result: ReliaResult<CutSetFamily>,
}

impl StrategyRun {
    /// Number of minimal cut sets found, `None` if the run failed.
    pub fn count(&self) -> Option<usize> {
        self.result.as_ref().ok().map(CutSetFamily::len)
    }
}

/// Runs of every compared strategy, in the order given.
#[derive(Debug)]
pub struct StrategyComparison {
    pub runs: Vec<StrategyRun>,
}

impl StrategyComparison {
    /// True when every run succeeded with the same family.
    pub fn all_match(&self) -> bool {
        let mut families = self.runs.iter().map(|r| r.result.as_ref().ok());
        match families.next() {
            Some(Some(first)) => families.all(|f| f == Some(first)),
            Some(None) => false,
            None => true,
        }
    }

    pub fn run(&self, name: &str) -> Option<&StrategyRun> {
        self.runs.iter().find(|r| r.name == name)
    }

    /// The fastest successful run.
    pub fn fastest(&self) -> Option<&StrategyRun> {
        self.runs
            .iter()
            .filter(|r| r.result.is_ok())
            .min_by_key(|r| r.elapsed)
    }
}

/// Run every strategy against `graph`, timing each one.
pub fn compare_strategies(
    graph: &dyn IPathSource,
    strategies: &[&dyn ICutSetStrategy],
) -> StrategyComparison {
    let runs: Vec<StrategyRun> = strategies
        .iter()
        .map(|strategy| {
            let start = Instant::now();
            let result = strategy.find_minimal_cut_sets(graph);
            let elapsed = start.elapsed();
            StrategyRun {
                name: strategy.name(),
                elapsed,
                result,
            }
        })
        .collect();

    let comparison = StrategyComparison { runs };
    for run in &comparison.runs {
        tracing::info!(
            strategy = run.name,
            elapsed_us = run.elapsed.as_micros() as u64,
            cut_sets = ?run.count(),
            "strategy run"
        );
    }
    comparison
}
