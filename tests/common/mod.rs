//! Shared helpers for the integration suites.

#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Deployment key used across suites: bytes `0x20..=0x3f`.
pub fn test_key_bytes() -> Vec<u8> {
    (0x20u8..0x40).collect()
}

/// Node id `0x01..=0x14`.
pub fn test_node_id() -> Vec<u8> {
    (1..=20).collect()
}

macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(phase = %$name, "test phase start");
    };
}

macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = %$name, "test complete");
    };
}

macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let ok: bool = $cond;
        tracing::debug!(
            check = %$msg,
            expected = ?$expected,
            actual = ?$actual,
            ok,
            "assertion"
        );
        assert!(ok, "{}: expected {:?}, got {:?}", $msg, $expected, $actual);
    }};
}
