//! Top-level error aggregating every subsystem.

use super::error_code::ReliaErrorCode;
use super::{ConfigError, CurveError, CutSetError, GraphError, ProbabilityError};

/// Errors surfaced by any relia operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ReliaError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Cut-set error: {0}")]
    CutSet(#[from] CutSetError),

    #[error("Probability error: {0}")]
    Probability(#[from] ProbabilityError),

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type ReliaResult<T> = Result<T, ReliaError>;

impl ReliaErrorCode for ReliaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::CutSet(e) => e.error_code(),
            Self::Probability(e) => e.error_code(),
            Self::Curve(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
