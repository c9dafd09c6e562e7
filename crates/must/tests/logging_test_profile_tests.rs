use must::logging_facility::{init, Profile};
use tracing::Level;

#[test]
fn test_test_profile_applies_filter() {
    init(Profile::Test);

    // RUST_LOG replaces the profile filter
    if std::env::var("RUST_LOG").is_ok() {
        return;
    }
    assert!(tracing::enabled!(target: "must::tester", Level::TRACE));
    assert!(!tracing::enabled!(target: "elsewhere", Level::ERROR));
}
