//! Tracing subscriber setup
//!
//! The workspace ships no binary of its own, so the embedding application
//! calls [`init`] once at startup after loading configuration.

use crate::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from configuration.
///
/// `RUST_LOG` overrides the configured log level when set. Safe to call
/// only once; a second call returns without replacing the subscriber.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_logging {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}
