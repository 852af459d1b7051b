//! Reliability-vs-time table produced by an external sampler.

use serde::{Deserialize, Serialize};

use crate::errors::CurveError;

/// Parallel `time` / `reliability` columns.
///
/// Invariants, checked on construction: equal lengths, time non-negative and
/// strictly increasing, reliability within [0, 1] and non-increasing.
/// Zero or one sample is a valid (degenerate) curve.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CurveColumns", into = "CurveColumns")]
pub struct ReliabilityCurve {
    time: Vec<f64>,
    reliability: Vec<f64>,
}

/// Unvalidated column form used for (de)serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveColumns {
    pub time: Vec<f64>,
    pub reliability: Vec<f64>,
}

impl ReliabilityCurve {
    pub fn new(time: Vec<f64>, reliability: Vec<f64>) -> Result<Self, CurveError> {
        if time.len() != reliability.len() {
            return Err(CurveError::LengthMismatch {
                times: time.len(),
                reliabilities: reliability.len(),
            });
        }
        for (index, (&t, &r)) in time.iter().zip(&reliability).enumerate() {
            if t.is_nan() || t < 0.0 {
                return Err(CurveError::NegativeTime { index, value: t });
            }
            if !(0.0..=1.0).contains(&r) {
                return Err(CurveError::ReliabilityOutOfRange { index, value: r });
            }
            if index > 0 {
                if t <= time[index - 1] {
                    return Err(CurveError::NonIncreasingTime { index });
                }
                if r > reliability[index - 1] {
                    return Err(CurveError::IncreasingReliability { index });
                }
            }
        }
        Ok(Self { time, reliability })
    }

    /// Build from `(time, reliability)` pairs.
    pub fn from_samples<I>(samples: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (time, reliability) = samples.into_iter().unzip();
        Self::new(time, reliability)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.time
    }

    pub fn reliabilities(&self) -> &[f64] {
        &self.reliability
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.reliability.iter().copied())
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.samples().next()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        match (self.time.last(), self.reliability.last()) {
            (Some(&t), Some(&r)) => Some((t, r)),
            _ => None,
        }
    }
}

impl TryFrom<CurveColumns> for ReliabilityCurve {
    type Error = CurveError;

    fn try_from(raw: CurveColumns) -> Result<Self, Self::Error> {
        Self::new(raw.time, raw.reliability)
    }
}

impl From<ReliabilityCurve> for CurveColumns {
    fn from(curve: ReliabilityCurve) -> Self {
        Self {
            time: curve.time,
            reliability: curve.reliability,
        }
    }
}
