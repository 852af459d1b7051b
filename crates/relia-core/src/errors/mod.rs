//! Error handling for relia.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod curve_error;
pub mod cutset_error;
pub mod error_code;
pub mod graph_error;
pub mod probability_error;
pub mod relia_error;

pub use config_error::ConfigError;
pub use curve_error::CurveError;
pub use cutset_error::CutSetError;
pub use error_code::ReliaErrorCode;
pub use graph_error::GraphError;
pub use probability_error::ProbabilityError;
pub use relia_error::{ReliaError, ReliaResult};
