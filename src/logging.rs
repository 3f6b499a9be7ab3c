//! Console logging setup

use crate::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Parse `directives`, falling back to the built-in filter when they are invalid.
///
/// Returns the filter and, on fallback, the parse error.
pub fn filter(directives: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err.to_string())),
    }
}

/// Install the global subscriber with the configured `directives`.
///
/// Calling this twice leaves the first subscriber in place.
pub fn init(directives: &str) {
    let (filter, rejected) = filter(directives);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    if installed.is_err() {
        tracing::debug!("logger already initialised");
    }
    if let Some(error) = rejected {
        tracing::warn!(directives, %error, "invalid log filter, using {DEFAULT_LOG_FILTER}");
    }
}
