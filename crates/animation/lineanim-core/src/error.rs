//! Error types for the interpolation engine.

use crate::value::ValueKind;

/// Shape errors raised by [`Interpolator::interpolate`](crate::Interpolator::interpolate).
///
/// These are programming errors, not transient conditions: nothing is retried
/// or silently defaulted, and callers wanting a fallback must catch
/// explicitly.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InterpError {
    /// Operand kinds differ
    #[error("cannot interpolate between {left:?} and {right:?}")]
    TypeMismatch { left: ValueKind, right: ValueKind },

    /// Vector operands have different lengths
    #[error("vector operands must have the same length ({left} vs {right})")]
    VectorLengthMismatch { left: usize, right: usize },

    /// Composite operands carry different tags
    #[error("composite tags do not match ({left} vs {right})")]
    CompositeTagMismatch { left: String, right: String },

    /// No schema registered for a composite tag
    #[error("no schema registered for composite tag '{tag}'")]
    UnknownComposite { tag: String },

    /// A composite is missing a field its schema declares
    #[error("composite '{tag}' is missing field '{field}'")]
    MissingField { tag: String, field: String },

    /// A composite field disagrees with its declared kind
    #[error("field '{field}' of composite '{tag}' does not match its declared kind {declared:?}")]
    FieldKindMismatch {
        tag: String,
        field: String,
        declared: ValueKind,
    },

    /// Interpolation over a zero-length span was requested
    #[error("cannot interpolate over a span of length 0")]
    DegenerateNormalization,
}
