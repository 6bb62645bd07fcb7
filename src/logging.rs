//! Diagnostic logging setup.
//!
//! Log output goes to stderr through `tracing-subscriber`. The filter comes
//! from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "parley_client=info,warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init();
}
