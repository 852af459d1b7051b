//! Summary types and their report form.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use relia_core::constants::BEYOND_SIMULATION_RANGE;

/// One entry of the summary map: a number, or the sentinel for a threshold
/// the curve never reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue {
    Value(f64),
    BeyondSimulationRange,
}

impl SummaryValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::BeyondSimulationRange => None,
        }
    }
}

impl From<Option<f64>> for SummaryValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::BeyondSimulationRange, Self::Value)
    }
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::BeyondSimulationRange => f.write_str(BEYOND_SIMULATION_RANGE),
        }
    }
}

impl Serialize for SummaryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::BeyondSimulationRange => serializer.serialize_str(BEYOND_SIMULATION_RANGE),
        }
    }
}

/// First sample time at which reliability is at or below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdCrossing {
    pub threshold: f64,
    /// `None` when the curve never drops that low.
    pub time: Option<f64>,
}

impl ThresholdCrossing {
    /// Summary key, e.g. `time_to_90%` for 0.9.
    pub fn key(&self) -> String {
        format!("time_to_{}%", (self.threshold * 100.0).round() as i64)
    }
}

/// Typed summary of a non-empty curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilitySummary {
    pub mttf: f64,
    pub max_time: f64,
    pub min_reliability: f64,
    pub crossings: Vec<ThresholdCrossing>,
}

impl ReliabilitySummary {
    /// Flat report map: `mttf`, `max_time`, `min_reliability`, and one
    /// `time_to_<percent>%` entry per threshold.
    pub fn to_map(&self) -> BTreeMap<String, SummaryValue> {
        let mut map = BTreeMap::new();
        map.insert("mttf".to_string(), SummaryValue::Value(self.mttf));
        map.insert("max_time".to_string(), SummaryValue::Value(self.max_time));
        map.insert(
            "min_reliability".to_string(),
            SummaryValue::Value(self.min_reliability),
        );
        for crossing in &self.crossings {
            map.insert(crossing.key(), crossing.time.into());
        }
        map
    }
}
