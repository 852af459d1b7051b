//! Component failure distributions: CDF (probability of failure by time t) and hazard rate.

use std::f64::consts::{PI, SQRT_2};

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;

use crate::errors::ProbabilityError;

/// Lifetime distribution of a single component.
///
/// Built through the validating constructors; deserialized values should be
/// checked with [`FailureDistribution::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FailureDistribution {
    /// Constant failure rate λ: F(t) = 1 - exp(-λt).
    Exponential { rate: f64 },
    /// Shape β, scale η: F(t) = 1 - exp(-(t/η)^β).
    Weibull { shape: f64, scale: f64 },
    /// ln(T) ~ Normal(μ, σ): F(t) = Φ((ln t - μ) / σ).
    LogNormal { mu: f64, sigma: f64 },
}

impl FailureDistribution {
    pub fn exponential(rate: f64) -> Result<Self, ProbabilityError> {
        let dist = Self::Exponential { rate };
        dist.validate()?;
        Ok(dist)
    }

    pub fn weibull(shape: f64, scale: f64) -> Result<Self, ProbabilityError> {
        let dist = Self::Weibull { shape, scale };
        dist.validate()?;
        Ok(dist)
    }

    pub fn log_normal(mu: f64, sigma: f64) -> Result<Self, ProbabilityError> {
        let dist = Self::LogNormal { mu, sigma };
        dist.validate()?;
        Ok(dist)
    }

    /// Check parameter domains.
    pub fn validate(&self) -> Result<(), ProbabilityError> {
        let reason = match *self {
            Self::Exponential { rate } if !(rate > 0.0 && rate.is_finite()) => {
                Some(format!("failure rate must be positive, got {rate}"))
            }
            Self::Weibull { shape, scale } if !(shape > 0.0 && scale > 0.0) => Some(format!(
                "shape and scale must be positive, got shape={shape} scale={scale}"
            )),
            Self::LogNormal { mu, sigma } if !(sigma > 0.0 && mu.is_finite()) => Some(format!(
                "sigma must be positive and mu finite, got mu={mu} sigma={sigma}"
            )),
            _ => None,
        };
        match reason {
            Some(reason) => Err(ProbabilityError::InvalidDistribution { reason }),
            None => Ok(()),
        }
    }

    /// Probability that the component has failed by time `t`. Zero for `t <= 0`.
    pub fn probability_of_failure(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        match *self {
            Self::Exponential { rate } => -(-rate * t).exp_m1(),
            Self::Weibull { shape, scale } => -(-(t / scale).powf(shape)).exp_m1(),
            Self::LogNormal { mu, sigma } => 0.5 * erfc(-(t.ln() - mu) / (sigma * SQRT_2)),
        }
    }

    /// Probability the component still works at time `t`.
    pub fn reliability(&self, t: f64) -> f64 {
        1.0 - self.probability_of_failure(t)
    }

    /// Instantaneous failure rate h(t) = f(t) / (1 - F(t)).
    pub fn hazard_rate(&self, t: f64) -> f64 {
        match *self {
            Self::Exponential { rate } => rate,
            Self::Weibull { shape, scale } => {
                if t < 0.0 {
                    return 0.0;
                }
                (shape / scale) * (t / scale).powf(shape - 1.0)
            }
            Self::LogNormal { mu, sigma } => {
                if t <= 0.0 {
                    return 0.0;
                }
                let z = (t.ln() - mu) / sigma;
                let pdf = (-0.5 * z * z).exp() / (t * sigma * (2.0 * PI).sqrt());
                let survival = 1.0 - self.probability_of_failure(t);
                if survival <= 0.0 {
                    f64::INFINITY
                } else {
                    pdf / survival
                }
            }
        }
    }
}
