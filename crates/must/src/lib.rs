//! must - non-halting assertion helpers for test suites
//!
//! Checks compare values and report failures to a host [`Reporter`] instead
//! of panicking, so one test can surface every mismatch in a single run.
//! This crate provides:
//! - Structural equality with a path-annotated diff (`diff`)
//! - Message-based error equivalence (`error_eq`)
//! - Length extraction over sequence-like values and one level of references (`shape`, `length`)
//! - The `Tester` facade and zero-configuration free functions (`tester`, `checks`)
//! - Reporting sinks and a tracing-based logging facility
//!
//! ```
//! use must::reporter::RecordingReporter;
//! use must::Tester;
//!
//! let reporter = RecordingReporter::new();
//! let tester = Tester::new(reporter.clone());
//!
//! assert!(!tester.be_same_length("abc", "defg", "M"));
//! assert_eq!(
//!     reporter.last().unwrap().render(),
//!     "M: expected length 3, got length 4"
//! );
//! ```

pub mod checks;
pub mod diff;
pub mod error_eq;
pub mod errors;
pub mod length;
pub mod logging_facility;
pub mod reporter;
pub mod shape;
pub mod templates;
pub mod tester;

pub use must_core_types;

// Re-export commonly used types
pub use checks::{be_equal, be_equal_errors, be_error, be_error_if, be_no_error, be_same_length};
pub use errors::{MustError, MustErrorKind, Result};
pub use length::length;
pub use reporter::{Failure, FailureArg, Reporter, SoftReporter};
pub use shape::{Inspect, Kind, Shape};
pub use tester::Tester;
