//! Core value kinds and typed values for interpolation.
//!
//! The set of kinds is closed on purpose: interpolation dispatches with an
//! exhaustive match, so shape incompatibilities are the only runtime checks
//! left (vector lengths and composite tags).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Coarse kind of a [`Value`], used for dispatch and error reporting.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Vector,
    Timestamp,
    Composite,
}

/// A value that the interpolation engine knows how to blend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar number. Circular quantities (headings, hues) are still plain
    /// scalars; the modulus is supplied at interpolation time or declared
    /// per-field in a composite schema.
    Scalar(f64),

    /// Fixed-length numeric vector. Two vectors blend only if their lengths
    /// match; the same modulus applies to every element.
    Vector(Vec<f64>),

    /// Instant in time as epoch milliseconds, blended via its linear form.
    Timestamp(i64),

    /// Named aggregate (e.g. a camera pose). The tag selects a
    /// [`CompositeSchema`](crate::schema::CompositeSchema) that declares how
    /// each field interpolates.
    Composite {
        tag: String,
        fields: HashMap<String, Value>,
    },
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Vector(_) => ValueKind::Vector,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Composite { .. } => ValueKind::Composite,
        }
    }

    /// Convenience constructors
    pub fn scalar(v: f64) -> Self {
        Value::Scalar(v)
    }

    pub fn vector(v: impl Into<Vec<f64>>) -> Self {
        Value::Vector(v.into())
    }

    pub fn timestamp(epoch_ms: i64) -> Self {
        Value::Timestamp(epoch_ms)
    }

    /// Build a composite from (field, value) pairs.
    pub fn composite(
        tag: impl Into<String>,
        fields: impl IntoIterator<Item = (impl Into<String>, Value)>,
    ) -> Self {
        Value::Composite {
            tag: tag.into(),
            fields: fields.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }
}
