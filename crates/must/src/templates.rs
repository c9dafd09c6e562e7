//! Failure message templates.
//!
//! These are the only persisted output format of the crate. `{}` marks a
//! substitution point; the first argument is always the caller's message.

/// `be_equal`: message, rendered diff
pub const DIFF: &str = "{}: diff\n{}";

/// `be_equal`: message, snapshot error
pub const SNAPSHOT: &str = "{}: could not compare values - {}";

/// `be_equal_errors`: message, expected message or `<nil>`, got message or `<nil>`
pub const ERRORS: &str = "{}\nExpected '{}', got '{}'";

/// `be_no_error`: message, got message
pub const NO_ERROR: &str = "{}: error: {}";

/// `be_error`: message, `<nil>`
pub const ERROR: &str = "{}: expected an error, got '{}'";

/// `be_same_length`: message, extraction error
pub const LENGTH_EXTRACTION: &str = "{}: could not test lengths - {}";

/// `be_same_length`: message, expected length, got length
pub const LENGTH_MISMATCH: &str = "{}: expected length {}, got length {}";
