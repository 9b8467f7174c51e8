//! Diagnostic logging for library internals (request supersession, sweeps).
//! User-facing output goes through `ui::messages` instead.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RSTAFFDESK_LOG";

/// Install a stderr subscriber filtered by `RSTAFFDESK_LOG` (default `warn`).
/// Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
