//! Logging configuration using tracing
//!
//! Diagnostics go to stderr so stdout carries nothing but repository locations.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Filtering comes from the RUST_LOG environment variable and defaults to "warn",
/// so a successful run prints nothing on stderr.
///
/// # Example RUST_LOG values
/// - `RUST_LOG=debug` - Show every dependency as it is processed
/// - `RUST_LOG=chart_deps=trace` - Trace level for this crate only
///
/// # Errors
/// Returns an error if a global subscriber has already been installed
pub fn init() -> crate::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::ChartDepsError::Logging(format!("Failed to initialize tracing: {}", e))
        })?;

    Ok(())
}

/// Initialize logging for tests (no-op if already initialized)
pub fn init_test() {
    let _ = init();
}
