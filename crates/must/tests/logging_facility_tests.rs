#![allow(clippy::unwrap_used, clippy::expect_used)]

use must::logging_facility::test_capture::init_test_capture;
use must::must_core_types::schema::{EVENT_FAIL, EVENT_PASS, OP_BE_EQUAL, OP_BE_SAME_LENGTH};
use must::reporter::{RecordingReporter, TracingReporter};
use must::{Failure, Reporter, Tester};
use tracing::Level;

#[test]
fn test_pass_emits_pass_event() {
    let capture = init_test_capture();
    let tester = Tester::new(RecordingReporter::new());

    assert!(tester.be_equal("logging_unique_pass_1", "logging_unique_pass_1", ""));

    capture.assert_event_exists(OP_BE_EQUAL, EVENT_PASS);
}

#[test]
fn test_fail_emits_fail_event_with_rendered_failure() {
    let capture = init_test_capture();
    let tester = Tester::new(RecordingReporter::new());

    assert!(!tester.be_same_length("a", "ab", "logging_unique_fail_2"));

    let events = capture.events_for_op(OP_BE_SAME_LENGTH);
    let failures: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_FAIL))
        .filter_map(|e| e.failure.clone())
        .filter(|f| f.starts_with("logging_unique_fail_2"))
        .collect();

    assert_eq!(
        failures,
        vec!["logging_unique_fail_2: expected length 1, got length 2".to_string()]
    );
}

#[test]
fn test_fail_event_is_warn_level() {
    let capture = init_test_capture();
    let tester = Tester::new(RecordingReporter::new());

    tester.be_equal(&1, &2, "logging_unique_level_3");

    let count = capture.count_events(|e| {
        e.level == Level::WARN
            && e.failure
                .as_deref()
                .is_some_and(|f| f.starts_with("logging_unique_level_3"))
    });
    assert_eq!(count, 1);
}

#[test]
fn test_tracing_reporter_emits_error_event() {
    let capture = init_test_capture();

    TracingReporter.report(Failure::new(
        "{}: error: {}",
        vec!["logging_unique_reporter_4".into(), "boom".into()],
    ));

    let count = capture.count_events(|e| {
        e.level == Level::ERROR
            && e.event.as_deref() == Some(EVENT_FAIL)
            && e.failure.as_deref() == Some("logging_unique_reporter_4: error: boom")
            && e.fields.get("template").map(String::as_str) == Some("{}: error: {}")
    });
    assert_eq!(count, 1);
}
