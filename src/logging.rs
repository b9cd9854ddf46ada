//! Tracing subscriber setup for the gwm binary.
//!
//! Logs go to stderr so stdout stays usable from shell functions like
//! `cd "$(gwm resolve feature)"`.

use std::io;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, checked before `RUST_LOG`
pub const LOG_ENV: &str = "GWM_LOG";

/// Build the filter from `GWM_LOG`, then `RUST_LOG`, then the default level
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
