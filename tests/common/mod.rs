//! Common test utilities and helpers

use objkit::Record;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary
///
/// Honors `RUST_LOG`, e.g. `RUST_LOG=objkit=trace cargo test`.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Keys of a record in iteration order
#[allow(dead_code)]
pub fn keys_of<V>(record: &Record<V>) -> Vec<String> {
    record.keys().cloned().collect()
}
