//! In-memory reporter for inspecting failure output.

use crate::reporter::{Failure, Reporter};
use std::sync::{Arc, Mutex};

/// Records every failure it receives
///
/// Clones share the same record, so a clone can be handed to a `Tester`
/// while the original is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    failures: Arc<Mutex<Vec<Failure>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded failures
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().map(|f| f.clone()).unwrap_or_default()
    }

    /// Get the most recent failure, if any
    pub fn last(&self) -> Option<Failure> {
        self.failures
            .lock()
            .ok()
            .and_then(|f| f.last().cloned())
    }

    /// Number of recorded failures
    pub fn count(&self) -> usize {
        self.failures.lock().map(|f| f.len()).unwrap_or_default()
    }

    /// Clear all recorded failures
    pub fn clear(&self) {
        self.failures.lock().map(|mut f| f.clear()).ok();
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, failure: Failure) {
        self.failures
            .lock()
            .map(|mut failures| failures.push(failure))
            .ok();
    }
}
