//! The assertion facade.

use crate::diff::{self, snapshot, Node};
use crate::error_eq::{equivalent, message_or_nil, NIL};
use crate::length::length;
use crate::reporter::{Failure, Reporter};
use crate::shape::Inspect;
use crate::templates;
use crate::{log_check_fail, log_check_pass};
use must_core_types::schema::{
    OP_BE_EQUAL, OP_BE_EQUAL_ERRORS, OP_BE_ERROR, OP_BE_NO_ERROR, OP_BE_SAME_LENGTH,
};
use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Replacement for the built-in structural equality
pub type ComparisonFn = Box<dyn Fn(&Node, &Node) -> bool + Send + Sync>;

/// Replacement for the built-in diff renderer
pub type DiffFn = Box<dyn Fn(&Node, &Node) -> String + Send + Sync>;

/// Runs checks and reports failures to a [`Reporter`]
///
/// Every check returns `true` on pass. On fail it reports exactly one
/// [`Failure`] and returns `false`; it never panics or stops the caller.
///
/// Comparison and diff rendering can be replaced per instance. An override,
/// when set, receives the two [`Node`] snapshots unmodified and fully decides
/// the outcome; the built-in logic does not run.
///
/// ```
/// use must::reporter::RecordingReporter;
/// use must::Tester;
///
/// let reporter = RecordingReporter::new();
/// let tester = Tester::new(reporter.clone()).with_diff(|_, _| "custom".to_string());
///
/// assert!(!tester.be_equal("a", "b", "letters"));
/// assert_eq!(reporter.last().unwrap().render(), "letters: diff\ncustom");
/// ```
pub struct Tester<R> {
    reporter: R,
    comparison: Option<ComparisonFn>,
    diff: Option<DiffFn>,
}

impl<R: Reporter> Tester<R> {
    /// Create a tester with the built-in comparison and diff
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            comparison: None,
            diff: None,
        }
    }

    /// Replace structural equality for every `be_equal` on this tester
    ///
    /// The override runs on snapshots. Any value whose `Serialize` impl
    /// succeeds can be snapshotted; a value whose `Serialize` impl returns an
    /// error is reported as a snapshot failure before the override is
    /// consulted.
    pub fn with_comparison<F>(mut self, comparison: F) -> Self
    where
        F: Fn(&Node, &Node) -> bool + Send + Sync + 'static,
    {
        self.comparison = Some(Box::new(comparison));
        self
    }

    /// Replace diff rendering for every `be_equal` on this tester
    pub fn with_diff<F>(mut self, diff: F) -> Self
    where
        F: Fn(&Node, &Node) -> String + Send + Sync + 'static,
    {
        self.diff = Some(Box::new(diff));
        self
    }

    /// Get the reporting sink
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Check that `expected` and `got` are structurally equal.
    ///
    /// Failure: `"{message}: diff\n{diff}"`. A value whose `Serialize` impl
    /// returns an error fails with `"{message}: could not compare values - {error}"`.
    pub fn be_equal<E, G>(&self, expected: &E, got: &G, message: &str) -> bool
    where
        E: Serialize + ?Sized,
        G: Serialize + ?Sized,
    {
        let snapshots = snapshot(expected).and_then(|e| Ok((e, snapshot(got)?)));
        let (expected, got) = match snapshots {
            Ok(pair) => pair,
            Err(err) => {
                return self.fail(
                    OP_BE_EQUAL,
                    Failure::new(
                        templates::SNAPSHOT,
                        vec![message.into(), err.to_string().into()],
                    ),
                )
            }
        };

        if self.equal(&expected, &got) {
            return self.pass(OP_BE_EQUAL);
        }
        let diff = self.diff(&expected, &got);
        self.fail(
            OP_BE_EQUAL,
            Failure::new(templates::DIFF, vec![message.into(), diff.into()]),
        )
    }

    /// Check that two optional errors carry the same message.
    ///
    /// Failure: `"{message}\nExpected '{expected}', got '{got}'"`, with `<nil>`
    /// standing in for an absent side.
    pub fn be_equal_errors(
        &self,
        expected: Option<&dyn Error>,
        got: Option<&dyn Error>,
        message: &str,
    ) -> bool {
        if equivalent(expected, got) {
            return self.pass(OP_BE_EQUAL_ERRORS);
        }
        self.fail(
            OP_BE_EQUAL_ERRORS,
            Failure::new(
                templates::ERRORS,
                vec![
                    message.into(),
                    message_or_nil(expected).into(),
                    message_or_nil(got).into(),
                ],
            ),
        )
    }

    /// Check that no error occurred.
    ///
    /// Failure: `"{message}: error: {got}"`.
    pub fn be_no_error(&self, got: Option<&dyn Error>, message: &str) -> bool {
        match got {
            None => self.pass(OP_BE_NO_ERROR),
            Some(err) => self.fail(
                OP_BE_NO_ERROR,
                Failure::new(
                    templates::NO_ERROR,
                    vec![message.into(), err.to_string().into()],
                ),
            ),
        }
    }

    /// Check that an error occurred.
    ///
    /// Failure: `"{message}: expected an error, got '<nil>'"`.
    pub fn be_error(&self, got: Option<&dyn Error>, message: &str) -> bool {
        match got {
            Some(_) => self.pass(OP_BE_ERROR),
            None => self.fail(
                OP_BE_ERROR,
                Failure::new(templates::ERROR, vec![message.into(), NIL.into()]),
            ),
        }
    }

    /// Check that an error occurred iff `error_expected` is set.
    ///
    /// Delegates to [`Tester::be_error`] or [`Tester::be_no_error`].
    pub fn be_error_if(
        &self,
        error_expected: bool,
        got: Option<&dyn Error>,
        message: &str,
    ) -> bool {
        if error_expected {
            self.be_error(got, message)
        } else {
            self.be_no_error(got, message)
        }
    }

    /// Check that two sequence-like values have the same length.
    ///
    /// Lengths are only compared when both extractions succeed. Failures:
    /// `"{message}: could not test lengths - {error}"` or
    /// `"{message}: expected length {n}, got length {m}"`.
    pub fn be_same_length<E, G>(&self, expected: &E, got: &G, message: &str) -> bool
    where
        E: Inspect + ?Sized,
        G: Inspect + ?Sized,
    {
        match length(expected).and_then(|n| Ok((n, length(got)?))) {
            Err(err) => self.fail(
                OP_BE_SAME_LENGTH,
                Failure::new(
                    templates::LENGTH_EXTRACTION,
                    vec![message.into(), err.to_string().into()],
                ),
            ),
            Ok((n, m)) if n == m => self.pass(OP_BE_SAME_LENGTH),
            Ok((n, m)) => self.fail(
                OP_BE_SAME_LENGTH,
                Failure::new(
                    templates::LENGTH_MISMATCH,
                    vec![message.into(), n.into(), m.into()],
                ),
            ),
        }
    }

    fn equal(&self, expected: &Node, got: &Node) -> bool {
        match &self.comparison {
            Some(comparison) => comparison(expected, got),
            None => diff::equal(expected, got),
        }
    }

    fn diff(&self, expected: &Node, got: &Node) -> String {
        match &self.diff {
            Some(diff) => diff(expected, got),
            None => diff::diff(expected, got),
        }
    }

    fn pass(&self, op: &str) -> bool {
        log_check_pass!(op);
        true
    }

    fn fail(&self, op: &str, failure: Failure) -> bool {
        log_check_fail!(op, failure);
        self.reporter.report(failure);
        false
    }
}

impl<R: fmt::Debug> fmt::Debug for Tester<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tester")
            .field("reporter", &self.reporter)
            .field("comparison", &self.comparison.as_ref().map(|_| "custom"))
            .field("diff", &self.diff.as_ref().map(|_| "custom"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::RecordingReporter;

    #[test]
    fn test_pass_does_not_report() {
        let reporter = RecordingReporter::new();
        let tester = Tester::new(reporter.clone());

        assert!(tester.be_equal("string", "string", ""));
        assert!(tester.be_same_length("abc", "xyz", ""));
        assert!(tester.be_no_error(None, ""));
        assert_eq!(reporter.count(), 0);
    }

    #[test]
    fn test_each_failure_reports_once() {
        let reporter = RecordingReporter::new();
        let tester = Tester::new(reporter.clone());

        assert!(!tester.be_equal(&1, &2, "a"));
        assert!(!tester.be_error(None, "b"));
        assert!(!tester.be_same_length("a", "ab", "c"));
        assert_eq!(reporter.count(), 3);
    }

    #[test]
    fn test_comparison_override_sees_tuple_keyed_maps() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "a");

        let reporter = RecordingReporter::new();
        let tester = Tester::new(reporter.clone()).with_comparison(|_, _| true);
        assert!(tester.be_equal(&map, &map, "p"));
        assert!(tester.be_equal(&u128::MAX, &0u8, "p"));
        assert_eq!(reporter.count(), 0);
    }

    #[test]
    fn test_serialize_error_is_reported_before_override() {
        struct Refuses;

        impl Serialize for Refuses {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("refused"))
            }
        }

        let reporter = RecordingReporter::new();
        let tester = Tester::new(reporter.clone()).with_comparison(|_, _| true);
        assert!(!tester.be_equal(&Refuses, &1, "M"));
        assert_eq!(
            reporter.last().unwrap().render(),
            "M: could not compare values - cannot capture a structural snapshot: refused"
        );
    }

    #[test]
    fn test_debug_shows_overrides() {
        let tester = Tester::new(RecordingReporter::new()).with_comparison(|_, _| true);
        let rendered = format!("{:?}", tester);
        assert!(rendered.contains("comparison: Some(\"custom\")"));
        assert!(rendered.contains("diff: None"));
    }
}
