//! tracing subscriber setup for the command-line tool.

use tracing_subscriber::EnvFilter;

/// Build the log filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging to stderr so stdout stays free for generated output.
///
/// Log level can be controlled with the RUST_LOG env var.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
