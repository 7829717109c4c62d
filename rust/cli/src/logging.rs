//! Tracing setup for the `koikoi` binary.

use tracing_subscriber::EnvFilter;

/// Filter variable read at startup, e.g. `KOIKOI_LOG=koikoi_engine=debug`.
pub const LOG_ENV: &str = "KOIKOI_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr fmt subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
