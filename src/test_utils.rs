//! Test logging helpers.
//!
//! Installs a `tracing-subscriber` formatter writing through the test
//! harness, filtered by `RUST_LOG` (default `node_credentials=trace`), and
//! provides the phase and assertion macros used across the test suites.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the test subscriber once per process.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("node_credentials=trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

/// Logs the start of a named test phase.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        $crate::__tracing::info!(phase = %$name, "test phase start");
    };
}

/// Logs the end of a named test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        $crate::__tracing::info!(test = %$name, "test complete");
    };
}

/// Asserts `cond`, logging expected and actual values first.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let ok: bool = $cond;
        $crate::__tracing::debug!(
            check = %$msg,
            expected = ?$expected,
            actual = ?$actual,
            ok,
            "assertion"
        );
        assert!(ok, "{}: expected {:?}, got {:?}", $msg, $expected, $actual);
    }};
}
