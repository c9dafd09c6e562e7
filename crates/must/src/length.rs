//! Length extraction over inspected shapes.

use crate::errors::{MustError, Result};
use crate::shape::{Inspect, Shape};

/// Compute the length of a sequence-like value.
///
/// Succeeds when the value is itself sequence-like (text, slice, array, map,
/// set) or a single-level reference to one. Indirection is followed exactly
/// once: a reference to a reference is rejected even if the innermost value
/// has a length.
///
/// # Errors
///
/// - `UnsupportedShape`: the value itself has no length
/// - `UnsupportedReferencedShape`: the value is a reference to something without a length
/// - `NilReference`: the value is an absent reference
pub fn length<T: Inspect + ?Sized>(value: &T) -> Result<usize> {
    match value.shape() {
        Shape::Counted { len, .. } => Ok(len),
        Shape::Reference(Some(target)) => match *target {
            Shape::Counted { len, .. } => Ok(len),
            other => Err(MustError::UnsupportedReferencedShape { kind: other.kind() }),
        },
        Shape::Reference(None) => Err(MustError::NilReference),
        Shape::Opaque(kind) => Err(MustError::UnsupportedShape { kind }),
    }
}
