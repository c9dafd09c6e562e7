//! Message-based error equivalence.

use std::error::Error;

/// Sentinel rendered in place of an absent error
pub const NIL: &str = "<nil>";

/// Decide whether two optional errors are the same.
///
/// Both absent is equivalent, exactly one absent is not, and two present
/// errors are equivalent iff their `Display` messages are byte-identical. The
/// concrete error types are never consulted.
pub fn equivalent(expected: Option<&dyn Error>, got: Option<&dyn Error>) -> bool {
    match (expected, got) {
        (None, None) => true,
        (Some(expected), Some(got)) => expected.to_string() == got.to_string(),
        _ => false,
    }
}

/// The error's message, or [`NIL`] when absent.
pub fn message_or_nil(err: Option<&dyn Error>) -> String {
    err.map(|e| e.to_string())
        .unwrap_or_else(|| NIL.to_string())
}
