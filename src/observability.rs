//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::Result;

/// Initialize JSON-formatted tracing with an env-filter derived from the
/// configured log level.
pub fn init_tracing(config: &ServiceConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Tracing initialized for service: {}", config.name);

    Ok(())
}
