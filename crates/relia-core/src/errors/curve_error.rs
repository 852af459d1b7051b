//! Reliability curve validation errors.

use super::error_code::{self, ReliaErrorCode};

/// A reliability curve that violates its column invariants.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("time and reliability columns differ in length: {times} vs {reliabilities}")]
    LengthMismatch { times: usize, reliabilities: usize },

    #[error("negative time {value} at sample {index}")]
    NegativeTime { index: usize, value: f64 },

    #[error("time is not strictly increasing at sample {index}")]
    NonIncreasingTime { index: usize },

    #[error("reliability {value} at sample {index} is outside [0, 1]")]
    ReliabilityOutOfRange { index: usize, value: f64 },

    #[error("reliability increases at sample {index}")]
    IncreasingReliability { index: usize },
}

impl ReliaErrorCode for CurveError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_CURVE
    }
}
