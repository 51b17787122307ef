//! # Telemetry
//!
//! Tracing bootstrap for embedders (desktop shell, tests, scripts).

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages everywhere
/// - `RUST_LOG=kelontong_shop=trace` - trace for the service layer only
/// - Default: INFO globally, DEBUG for the kelontong crates
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "info,kelontong_core=debug,kelontong_store=debug,kelontong_advisor=debug,kelontong_shop=debug",
        )
    });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
