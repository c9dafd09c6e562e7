//! Soft-assertion reporter for `cargo test`.
//!
//! libtest has no "mark failed and keep going" primitive, so failures are
//! collected and raised together when the reporter goes out of scope.

use crate::reporter::{Failure, Reporter};
use must_core_types::schema::EVENT_FAIL;
use std::sync::Mutex;

/// Collects failures and fails the test when dropped
///
/// Every reported failure is logged at error level as it happens. On drop,
/// if any failure was recorded and the thread is not already panicking, the
/// reporter panics once with every failure message.
///
/// ```should_panic
/// use must::reporter::SoftReporter;
/// use must::Tester;
///
/// let reporter = SoftReporter::new();
/// let tester = Tester::new(&reporter);
/// tester.be_equal("a", "b", "first");
/// tester.be_equal(&1, &2, "second");
/// // both checks ran; the test fails here
/// ```
#[derive(Debug, Default)]
pub struct SoftReporter {
    failures: Mutex<Vec<Failure>>,
}

impl SoftReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all failures recorded so far
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// True if any failure has been recorded
    pub fn has_failed(&self) -> bool {
        self.failures.lock().map(|f| !f.is_empty()).unwrap_or(true)
    }

    /// Remove and return the recorded failures
    ///
    /// Taken failures no longer fail the test on drop.
    pub fn take(&self) -> Vec<Failure> {
        self.failures
            .lock()
            .map(|mut f| std::mem::take(&mut *f))
            .unwrap_or_default()
    }
}

impl Reporter for SoftReporter {
    fn report(&self, failure: Failure) {
        tracing::error!(
            component = module_path!(),
            event = EVENT_FAIL,
            failure = %failure,
        );
        self.failures
            .lock()
            .map(|mut failures| failures.push(failure))
            .ok();
    }
}

impl Drop for SoftReporter {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let failures = std::mem::take(
            self.failures
                .get_mut()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        );
        if failures.is_empty() {
            return;
        }
        let rendered: Vec<String> = failures.iter().map(Failure::render).collect();
        panic!(
            "{} check(s) failed:\n{}",
            failures.len(),
            rendered.join("\n")
        );
    }
}
