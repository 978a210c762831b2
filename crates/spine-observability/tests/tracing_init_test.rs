//! Global subscriber installation. Kept in its own test binary because the
//! subscriber can only be set once per process.

use spine_core::config::ObservabilityConfig;
use spine_core::errors::ConfigError;
use spine_observability::tracing_setup::init_tracing;

#[test]
fn subscriber_installs_once() {
    let config = ObservabilityConfig {
        log_level: "warn".into(),
        json_logs: true,
    };
    init_tracing(&config).unwrap();

    let again = init_tracing(&config).unwrap_err();
    assert!(matches!(again, ConfigError::Invalid { ref field, .. } if field == "observability"));
}
