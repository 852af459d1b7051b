//! Curve statistics.

use std::collections::BTreeMap;

use relia_core::config::StatisticsConfig;
use relia_core::models::ReliabilityCurve;

use crate::summary::{ReliabilitySummary, SummaryValue, ThresholdCrossing};

/// Read-only statistics over a borrowed curve.
#[derive(Debug, Clone)]
pub struct ReliabilityStatistics<'a> {
    curve: &'a ReliabilityCurve,
    thresholds: Vec<f64>,
}

impl<'a> ReliabilityStatistics<'a> {
    /// Statistics with the default thresholds.
    pub fn new(curve: &'a ReliabilityCurve) -> Self {
        Self::with_config(curve, &StatisticsConfig::default())
    }

    pub fn with_config(curve: &'a ReliabilityCurve, config: &StatisticsConfig) -> Self {
        Self {
            curve,
            thresholds: config.thresholds.clone(),
        }
    }

    pub fn curve(&self) -> &ReliabilityCurve {
        self.curve
    }

    /// ∫R(t)dt over the sampled range by the trapezoidal rule.
    /// Fewer than two samples give 0.
    pub fn mean_time_to_failure(&self) -> f64 {
        let t = self.curve.times();
        let r = self.curve.reliabilities();
        t.windows(2)
            .zip(r.windows(2))
            .map(|(tw, rw)| (tw[1] - tw[0]) * (rw[0] + rw[1]) / 2.0)
            .sum()
    }

    /// Reliability at `time`: the sample value on an exact match, linear
    /// interpolation between neighbouring samples, and the first or last
    /// value outside the sampled range. An empty curve gives 0.
    pub fn availability(&self, time: f64) -> f64 {
        let t = self.curve.times();
        let r = self.curve.reliabilities();
        if t.is_empty() {
            return 0.0;
        }

        let idx = t.partition_point(|&x| x < time);
        if idx < t.len() && t[idx] == time {
            return r[idx];
        }
        if idx == 0 {
            return r[0];
        }
        if idx == t.len() {
            return r[t.len() - 1];
        }

        let (t1, t2) = (t[idx - 1], t[idx]);
        let (r1, r2) = (r[idx - 1], r[idx]);
        r1 + (r2 - r1) * (time - t1) / (t2 - t1)
    }

    /// First sample time with reliability at or below `threshold`.
    pub fn time_to_threshold(&self, threshold: f64) -> Option<f64> {
        // Reliability is non-increasing, so the samples above the threshold form a prefix.
        let idx = self
            .curve
            .reliabilities()
            .partition_point(|&r| r > threshold);
        self.curve.times().get(idx).copied()
    }

    /// Typed summary; `None` for an empty curve.
    pub fn summary(&self) -> Option<ReliabilitySummary> {
        let (max_time, min_reliability) = self.curve.last()?;
        let summary = ReliabilitySummary {
            mttf: self.mean_time_to_failure(),
            max_time,
            min_reliability,
            crossings: self
                .thresholds
                .iter()
                .map(|&threshold| ThresholdCrossing {
                    threshold,
                    time: self.time_to_threshold(threshold),
                })
                .collect(),
        };
        tracing::debug!(
            samples = self.curve.len(),
            mttf = summary.mttf,
            "reliability summary"
        );
        Some(summary)
    }

    /// Summary as a report map. Empty curve gives an empty map.
    pub fn reliability_summary(&self) -> BTreeMap<String, SummaryValue> {
        self.summary()
            .map(|s| s.to_map())
            .unwrap_or_default()
    }
}
