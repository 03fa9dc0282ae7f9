//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! - `warn`: recovered render failures, unreadable settings
//! - `info`: mode transitions, document loads
//! - `debug`: debounce scheduling, surface element resolution

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the filter directive, e.g. `MARKPAD_LOG=mark_pad=debug`.
pub const LOG_ENV: &str = "MARKPAD_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Call once, at startup; later calls are ignored.
pub fn init_logging() {
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(build_env_filter())
        .with(layer)
        .try_init();
}
