//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-crate log levels.
pub const LOG_ENV_VAR: &str = "RELIA_LOG";

/// Initialize the relia tracing/logging system with default settings.
///
/// Reads `RELIA_LOG` for per-crate log levels, e.g.
/// `RELIA_LOG=relia_cutset=debug,relia_calc=info`.
/// Falls back to `info` if `RELIA_LOG` is not set or is invalid.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing using the fallback level and output format from config.
/// `RELIA_LOG` still takes precedence over `config.log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        // Another subscriber (e.g. a test harness) may already be installed.
        if let Err(e) = result {
            tracing::debug!(error = %e, "tracing subscriber already initialized");
        }
    });
}
