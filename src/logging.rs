//! Logging setup built on `tracing-subscriber`.
//!
//! The filter comes from `RUST_LOG` and defaults to `info`, e.g.
//! `RUST_LOG=attendance_audit=debug` to see every flagged employee.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Logs go to stderr so reports printed to
/// stdout stay clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Installs a verbose subscriber for tests; safe to call repeatedly.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
