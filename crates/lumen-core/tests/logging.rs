//! Subscriber installation tests.
//!
//! Kept in its own test binary because the global subscriber can only be set
//! once per process.

use lumen_core::logging;

#[test]
fn test_second_install_is_rejected() {
    assert!(logging::try_init_with_filter("debug"));
    assert!(!logging::try_init_with_filter("trace"));

    tracing::debug!("subscriber installed");
}
