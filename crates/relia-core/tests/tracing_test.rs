use relia_core::config::ObservabilityConfig;
use relia_core::tracing::{init_tracing, init_tracing_with_config};

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    init_tracing_with_config(&ObservabilityConfig {
        log_level: "debug".to_string(),
        json: true,
    });
    tracing::info!("tracing initialized");
}
