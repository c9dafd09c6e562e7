//! Zero-configuration checks.
//!
//! Each function builds a default [`Tester`] over the borrowed reporter and
//! delegates to the method of the same name.

use crate::reporter::Reporter;
use crate::shape::Inspect;
use crate::tester::Tester;
use serde::Serialize;
use std::error::Error;

/// Check that `expected` and `got` are structurally equal; see [`Tester::be_equal`].
pub fn be_equal<R, E, G>(reporter: &R, expected: &E, got: &G, message: &str) -> bool
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    G: Serialize + ?Sized,
{
    Tester::new(reporter).be_equal(expected, got, message)
}

/// Check that two optional errors carry the same message; see [`Tester::be_equal_errors`].
pub fn be_equal_errors<R: Reporter + ?Sized>(
    reporter: &R,
    expected: Option<&dyn Error>,
    got: Option<&dyn Error>,
    message: &str,
) -> bool {
    Tester::new(reporter).be_equal_errors(expected, got, message)
}

/// Check that no error occurred; see [`Tester::be_no_error`].
pub fn be_no_error<R: Reporter + ?Sized>(
    reporter: &R,
    got: Option<&dyn Error>,
    message: &str,
) -> bool {
    Tester::new(reporter).be_no_error(got, message)
}

/// Check that an error occurred; see [`Tester::be_error`].
pub fn be_error<R: Reporter + ?Sized>(reporter: &R, got: Option<&dyn Error>, message: &str) -> bool {
    Tester::new(reporter).be_error(got, message)
}

/// Check that an error occurred iff `error_expected`; see [`Tester::be_error_if`].
pub fn be_error_if<R: Reporter + ?Sized>(
    reporter: &R,
    error_expected: bool,
    got: Option<&dyn Error>,
    message: &str,
) -> bool {
    Tester::new(reporter).be_error_if(error_expected, got, message)
}

/// Check that two values have the same length; see [`Tester::be_same_length`].
pub fn be_same_length<R, E, G>(reporter: &R, expected: &E, got: &G, message: &str) -> bool
where
    R: Reporter + ?Sized,
    E: Inspect + ?Sized,
    G: Inspect + ?Sized,
{
    Tester::new(reporter).be_same_length(expected, got, message)
}
