//! Integration tests for tagcheck-validator.

mod custom_rules;
mod json_records;
mod localization;
mod properties;
mod records;
mod sources;

/// Installs a test-writer subscriber so `RUST_LOG`-style output shows up
/// with `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
