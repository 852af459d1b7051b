//! Graph adapter errors.

use super::error_code::{self, ReliaErrorCode};

/// Errors raised while building or querying a system graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node {id} does not exist in the system")]
    UnknownNode { id: String },

    #[error("component with id {id} already exists")]
    DuplicateComponent { id: String },

    #[error("{id} is a reserved terminal identifier")]
    ReservedIdentifier { id: String },

    #[error("component {id} has no failure distribution defined")]
    MissingDistribution { id: String },

    #[error("invalid system definition: {reason}")]
    InvalidDefinition { reason: String },
}

impl ReliaErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::DuplicateComponent { .. } => error_code::DUPLICATE_COMPONENT,
            Self::ReservedIdentifier { .. } => error_code::RESERVED_IDENTIFIER,
            Self::MissingDistribution { .. } => error_code::MISSING_DISTRIBUTION,
            Self::InvalidDefinition { .. } => error_code::INVALID_DEFINITION,
        }
    }
}
