use crate::shape::Kind;
use thiserror::Error;

/// Result type alias using MustError
pub type Result<T> = std::result::Result<T, MustError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that tests and callers can match on
/// without depending on the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MustErrorKind {
    // Length extraction
    UnsupportedShape,
    UnsupportedReferencedShape,
    NilReference,

    // Structural snapshot
    Snapshot,
}

impl MustErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            MustErrorKind::UnsupportedShape => "ERR_UNSUPPORTED_SHAPE",
            MustErrorKind::UnsupportedReferencedShape => "ERR_UNSUPPORTED_REFERENCED_SHAPE",
            MustErrorKind::NilReference => "ERR_NIL_REFERENCE",
            MustErrorKind::Snapshot => "ERR_SNAPSHOT",
        }
    }
}

/// Errors raised while preparing values for a check
///
/// These never escape the facade: every one of them is converted into a
/// reported assertion failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MustError {
    /// The value itself has no length
    #[error("cannot get the length of type: {kind}")]
    UnsupportedShape { kind: Kind },

    /// The value is a reference whose target has no length
    #[error("cannot get the length of a reference to type: {kind}")]
    UnsupportedReferencedShape { kind: Kind },

    /// The value is an absent reference
    #[error("cannot get the length of a nil reference")]
    NilReference,

    /// The value could not be captured as a structural snapshot
    #[error("cannot capture a structural snapshot: {message}")]
    Snapshot { message: String },
}

impl MustError {
    /// Get the error kind
    pub fn kind(&self) -> MustErrorKind {
        match self {
            MustError::UnsupportedShape { .. } => MustErrorKind::UnsupportedShape,
            MustError::UnsupportedReferencedShape { .. } => {
                MustErrorKind::UnsupportedReferencedShape
            }
            MustError::NilReference => MustErrorKind::NilReference,
            MustError::Snapshot { .. } => MustErrorKind::Snapshot,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
