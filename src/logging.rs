//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `tapedeck=debug`).
pub const LOG_ENV: &str = "TAPEDECK_LOG";

/// Install the global subscriber, writing to stderr so logs never mix
/// with the status output on stdout. Safe to call more than once.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
