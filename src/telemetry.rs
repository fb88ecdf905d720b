//! Tracing setup for binaries and services embedding this crate

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Install a global subscriber, honoring `RUST_LOG` and falling back to
/// `default_filter`. Fails if a subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// Same as [`init_tracing`], with JSON output
pub fn init_json_tracing(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
}

/// Initialize tracing with the filter from `config`
pub fn init_from_config(config: &Config) -> Result<(), tracing_subscriber::util::TryInitError> {
    init_tracing(&config.rust_log)
}
