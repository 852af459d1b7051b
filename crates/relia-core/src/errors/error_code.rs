//! ReliaErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that a presentation layer can match on without parsing messages.
pub trait ReliaErrorCode {
    /// Returns the error code string (e.g., "MISSING_PROBABILITY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const DUPLICATE_COMPONENT: &str = "DUPLICATE_COMPONENT";
pub const RESERVED_IDENTIFIER: &str = "RESERVED_IDENTIFIER";
pub const MISSING_DISTRIBUTION: &str = "MISSING_DISTRIBUTION";
pub const INVALID_DEFINITION: &str = "INVALID_DEFINITION";
pub const COMBINATORIAL_LIMIT: &str = "COMBINATORIAL_LIMIT";
pub const MISSING_PROBABILITY: &str = "MISSING_PROBABILITY";
pub const INVALID_PROBABILITY: &str = "INVALID_PROBABILITY";
pub const UNBOUND_SYMBOL: &str = "UNBOUND_SYMBOL";
pub const INVALID_DISTRIBUTION: &str = "INVALID_DISTRIBUTION";
pub const MALFORMED_CURVE: &str = "MALFORMED_CURVE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
