//! Shared helpers for the factory integration tests.

#![allow(dead_code)]

/// Routes `tracing` output to the test harness. Safe to call from every test.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}
