use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// - Uses `RUST_LOG` if set (e.g. `RUST_LOG=skycast_core=debug`)
/// - Otherwise only warnings from our crates are shown.
///
/// Logs go to stderr so they never mix with the report on stdout.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skycast_cli=warn,skycast_core=warn"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
