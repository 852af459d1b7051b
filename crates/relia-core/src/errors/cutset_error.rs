//! Cut-set enumeration errors.

use super::error_code::{self, ReliaErrorCode};

/// Combinatorial guards tripped during cut-set enumeration.
/// Raised before the offending allocation; no partial family is returned.
#[derive(Debug, thiserror::Error)]
pub enum CutSetError {
    #[error("path enumeration exceeded the limit of {limit} source-sink paths")]
    PathLimitExceeded { limit: usize },

    #[error("cut-set candidates exceeded the limit of {limit} (attempted {attempted})")]
    CandidateLimitExceeded { limit: usize, attempted: usize },

    #[error("BDD construction exceeded the limit of {limit} nodes")]
    BddNodeLimitExceeded { limit: usize },
}

impl ReliaErrorCode for CutSetError {
    fn error_code(&self) -> &'static str {
        error_code::COMBINATORIAL_LIMIT
    }
}
