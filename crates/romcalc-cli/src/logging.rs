//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "ROMCALC_LOG";

/// Build the log filter from `ROMCALC_LOG`, else `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize tracing (log to stderr so answers stay clean on stdout).
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .init();
}
