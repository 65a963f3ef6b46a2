//! Tracing setup and structured events.

pub mod events;

use fair_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtered by `FAIR_LOG` or `default_filter`.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Later calls are no-ops.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter));
    install(filter, json);
}

/// Install a subscriber with an explicit filter, ignoring `FAIR_LOG`.
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    install(EnvFilter::new(filter), json);
}

fn install(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    // Err only means a subscriber is already installed.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
