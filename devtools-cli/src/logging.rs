use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Diagnostics go to stderr so they never interleave with command output.
/// Respects `RUST_LOG`; falls back to `warn` when it is unset or invalid.
/// Safe to call more than once: later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
