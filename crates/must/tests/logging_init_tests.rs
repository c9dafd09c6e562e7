use must::logging_facility::{init, Profile};
use must::reporter::RecordingReporter;
use must::Tester;

#[test]
fn test_init_idempotent() {
    // Multiple calls should not panic
    init(Profile::Development);
    init(Profile::Development);
    init(Profile::Production);

    let tester = Tester::new(RecordingReporter::new());
    assert!(tester.be_equal("logged", "logged", ""));
}
