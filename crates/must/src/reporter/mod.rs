//! Reporting sinks.
//!
//! A [`Reporter`] receives one [`Failure`] per failing check. It is
//! responsible for marking the enclosing test as failed; it must never stop
//! execution of the check that reported.
//!
//! Shipped sinks:
//! - [`SoftReporter`] - records failures and fails the test when dropped
//! - [`RecordingReporter`] - cloneable in-memory record for inspecting output
//! - [`TracingReporter`] - forwards failures as `tracing` error events

pub mod recording;
pub mod soft;
pub mod traced;

pub use recording::RecordingReporter;
pub use soft::SoftReporter;
pub use traced::TracingReporter;

use std::fmt;
use std::sync::Arc;

/// A substitution argument of a failure template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureArg {
    Text(String),
    Count(usize),
}

impl fmt::Display for FailureArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureArg::Text(text) => f.write_str(text),
            FailureArg::Count(count) => write!(f, "{}", count),
        }
    }
}

impl From<&str> for FailureArg {
    fn from(text: &str) -> Self {
        FailureArg::Text(text.to_string())
    }
}

impl From<String> for FailureArg {
    fn from(text: String) -> Self {
        FailureArg::Text(text)
    }
}

impl From<usize> for FailureArg {
    fn from(count: usize) -> Self {
        FailureArg::Count(count)
    }
}

/// A formatted failure: a template with `{}` placeholders plus its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    template: &'static str,
    args: Vec<FailureArg>,
}

impl Failure {
    pub fn new(template: &'static str, args: Vec<FailureArg>) -> Self {
        Self { template, args }
    }

    /// The format template, one of the constants in [`crate::templates`]
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// The substitution arguments, in placeholder order
    pub fn args(&self) -> &[FailureArg] {
        &self.args
    }

    /// Substitute the arguments into the template.
    ///
    /// Placeholders without a matching argument are left as `{}`; surplus
    /// arguments are ignored. Arguments are inserted verbatim and never
    /// re-scanned for placeholders.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut args = self.args.iter();
        let mut pieces = self.template.split("{}");
        if let Some(first) = pieces.next() {
            out.push_str(first);
        }
        for piece in pieces {
            match args.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str("{}"),
            }
            out.push_str(piece);
        }
        out
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The host test-reporting sink
pub trait Reporter {
    /// Record a failed check and mark the enclosing test as failed.
    fn report(&self, failure: Failure);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, failure: Failure) {
        (**self).report(failure)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, failure: Failure) {
        (**self).report(failure)
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, failure: Failure) {
        (**self).report(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_in_order() {
        let failure = Failure::new(
            "{}: expected length {}, got length {}",
            vec!["M".into(), 3.into(), 4.into()],
        );
        assert_eq!(failure.render(), "M: expected length 3, got length 4");
        assert_eq!(failure.to_string(), failure.render());
    }

    #[test]
    fn test_render_does_not_rescan_arguments() {
        let failure = Failure::new("{}: error: {}", vec!["{}".into(), "boom".into()]);
        assert_eq!(failure.render(), "{}: error: boom");
    }

    #[test]
    fn test_render_leaves_unfilled_placeholders() {
        let failure = Failure::new("{}: diff\n{}", vec!["only".into()]);
        assert_eq!(failure.render(), "only: diff\n{}");
    }

    #[test]
    fn test_reporter_through_indirection() {
        let recorder = RecordingReporter::new();
        let boxed: Box<dyn Reporter> = Box::new(recorder.clone());
        (&boxed).report(Failure::new("{}", vec!["x".into()]));
        Arc::new(recorder.clone()).report(Failure::new("{}", vec!["y".into()]));

        assert_eq!(recorder.count(), 2);
    }
}
