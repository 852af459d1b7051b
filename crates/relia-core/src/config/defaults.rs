// Single source of truth for all default values.

// --- Cut sets ---
pub const DEFAULT_MAX_PATHS: usize = 10_000;
pub const DEFAULT_MAX_CANDIDATES: usize = 1_000_000;
pub const DEFAULT_MAX_BDD_NODES: usize = 1_000_000;

// --- Probability ---
pub const DEFAULT_MAX_EVENTS: usize = 20; // 2^20 - 1 subsets

// --- Statistics ---
pub const DEFAULT_THRESHOLDS: [f64; 3] = [0.9, 0.5, 0.1];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
