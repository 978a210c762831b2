//! Subscriber installation for processes that embed the spine crates.
//!
//! The libraries only emit `tracing` events; nothing is printed until the
//! host calls [`init_tracing`] once at startup.

pub mod events;

use tracing_subscriber::EnvFilter;

use spine_core::config::ObservabilityConfig;
use spine_core::errors::ConfigError;

/// Environment variable holding the log filter. Overrides `log_level`.
pub const LOG_ENV: &str = "SPINE_LOG";

/// Filter directive in effect: a non-blank `SPINE_LOG`, else `config.log_level`.
pub fn filter_directive(config: &ObservabilityConfig) -> String {
    std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

/// Parse a filter directive such as `info,spine_merge=debug`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directive).map_err(|e| ConfigError::Invalid {
        field: "observability.log_level".to_string(),
        reason: format!("{directive:?}: {e}"),
    })
}

/// Install the global subscriber described by `config`.
///
/// Fails when the filter does not parse or a global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let filter = build_filter(&filter_directive(config))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| ConfigError::Invalid {
        field: "observability".to_string(),
        reason: format!("subscriber already installed: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_targeted_directives_parse() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("warn,spine_merge=debug").is_ok());
    }

    #[test]
    fn unknown_level_is_a_config_error() {
        let err = build_filter("spine_merge=loudest").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "observability.log_level"));
    }
}
