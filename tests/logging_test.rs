//! Logging initialization test.
//!
//! Lives in its own integration binary because the tracing subscriber
//! can only be installed once per process.

use quicklink::logging;

#[test]
fn test_init_writes_to_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quicklink.log");

    logging::init_at(&path).unwrap();
    tracing::info!(target: "quicklink", "logging smoke test");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("logging smoke test"));
}
