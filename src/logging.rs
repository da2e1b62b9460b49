//! Diagnostic logging for the binaries.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once to
//! install a stderr subscriber so stdout stays reserved for page output.

use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "KBVIEW_LOG";
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Invalid filter strings fall back to
/// [`DEFAULT_FILTER`]; a second call is a no-op.
pub fn init(filter: Option<&str>) {
    let filter = filter
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
