/// relia version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved identifier of the source terminal.
pub const SOURCE_ID: &str = "source";

/// Reserved identifier of the sink terminal.
pub const SINK_ID: &str = "sink";

/// Text used when a reliability threshold is never crossed within the curve.
pub const BEYOND_SIMULATION_RANGE: &str = "Beyond simulation range";

/// Prefix of the symbol generated for a component's failure probability.
pub const FAILURE_SYMBOL_PREFIX: &str = "F_";

/// Tolerance below which a system unreliability is treated as zero.
pub const UNRELIABILITY_EPSILON: f64 = 1e-10;
