//! Probability and unreliability errors.

use super::error_code::{self, ReliaErrorCode};

/// Errors raised by the unreliability calculator and failure distributions.
#[derive(Debug, thiserror::Error)]
pub enum ProbabilityError {
    #[error("no probability defined for component {component}")]
    MissingProbability { component: String },

    #[error("probability {value} for component {component} is outside [0, 1]")]
    InvalidProbability { component: String, value: f64 },

    #[error("inclusion-exclusion over {events} events exceeds the limit of {limit}")]
    EventLimitExceeded { limit: usize, events: usize },

    #[error("symbol {symbol} has no bound value")]
    UnboundSymbol { symbol: String },

    #[error("invalid failure distribution: {reason}")]
    InvalidDistribution { reason: String },
}

impl ReliaErrorCode for ProbabilityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingProbability { .. } => error_code::MISSING_PROBABILITY,
            Self::InvalidProbability { .. } => error_code::INVALID_PROBABILITY,
            Self::EventLimitExceeded { .. } => error_code::COMBINATORIAL_LIMIT,
            Self::UnboundSymbol { .. } => error_code::UNBOUND_SYMBOL,
            Self::InvalidDistribution { .. } => error_code::INVALID_DISTRIBUTION,
        }
    }
}
