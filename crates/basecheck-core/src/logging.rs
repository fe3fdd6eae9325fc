//! Tracing initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Filtering is controlled by `BASECHECK_LOG` (e.g. `basecheck=debug`);
/// defaults to `info`. Safe to call more than once: later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_env("BASECHECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
