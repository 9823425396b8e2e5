//! Structured logging via `tracing`.
//!
//! Everything goes to stderr: stdout belongs to the MCP protocol stream.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. An unparseable filter falls back to `info`
/// rather than aborting startup. Calling this twice is a no-op.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("[papierkram] invalid log filter \"{filter}\": {e}; using \"info\"");
        EnvFilter::new("info")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
