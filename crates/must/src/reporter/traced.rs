//! Reporter that only emits log events.

use crate::reporter::{Failure, Reporter};
use must_core_types::schema::EVENT_FAIL;

/// Forwards each failure as a `tracing` error event
///
/// Useful outside libtest (harnesses, smoke checks) where failing is the
/// subscriber's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, failure: Failure) {
        tracing::error!(
            component = module_path!(),
            event = EVENT_FAIL,
            template = failure.template(),
            failure = %failure,
        );
    }
}
