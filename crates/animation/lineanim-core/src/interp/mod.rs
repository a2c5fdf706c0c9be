//! Typed interpolation engine.
//!
//! [`Interpolator`] computes the value `t / total` of the way from one
//! [`Value`] to another. Scalars may wrap around a modulus, vectors blend
//! element-wise, timestamps blend on their epoch form, and composites recurse
//! field by field under the schema registered for their tag.

pub mod functions;

use crate::error::InterpError;
use crate::schema::SchemaRegistry;
use crate::value::{Value, ValueKind};

use functions::{lerp_f64, lerp_millis};

/// Stateless interpolation engine carrying the composite schema table.
#[derive(Clone, Debug)]
pub struct Interpolator {
    schemas: SchemaRegistry,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpolator {
    /// Engine with the builtin `point` and `camera` schemas registered.
    pub fn new() -> Self {
        Interpolator {
            schemas: SchemaRegistry::with_builtin(),
        }
    }

    /// Engine with a caller-supplied schema table.
    pub fn with_schemas(schemas: SchemaRegistry) -> Self {
        Interpolator { schemas }
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn schemas_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.schemas
    }

    /// Convenience: interpolate with a unit span and no wraparound.
    pub fn lerp(&self, a: &Value, b: &Value, t: f64) -> Result<Value, InterpError> {
        self.interpolate(a, b, t, 1.0, None)
    }

    /// Compute the value `t / total` of the way from `a` to `b`.
    ///
    /// `modulus` applies to scalar operands (and uniformly to every vector
    /// element); composites ignore it and use their per-field declarations.
    ///
    /// Errors when the operands are not shape-compatible or `total == 0`;
    /// `t = 0` reproduces `a` and `t = total` reproduces `b` exactly.
    pub fn interpolate(
        &self,
        a: &Value,
        b: &Value,
        t: f64,
        total: f64,
        modulus: Option<f64>,
    ) -> Result<Value, InterpError> {
        if total == 0.0 {
            return Err(InterpError::DegenerateNormalization);
        }

        match (a, b) {
            (Value::Scalar(va), Value::Scalar(vb)) => {
                Ok(Value::Scalar(lerp_f64(*va, *vb, t, total, modulus)))
            }
            (Value::Vector(va), Value::Vector(vb)) => {
                if va.len() != vb.len() {
                    return Err(InterpError::VectorLengthMismatch {
                        left: va.len(),
                        right: vb.len(),
                    });
                }
                let out = va
                    .iter()
                    .zip(vb.iter())
                    .map(|(ea, eb)| lerp_f64(*ea, *eb, t, total, modulus))
                    .collect();
                Ok(Value::Vector(out))
            }
            (Value::Timestamp(va), Value::Timestamp(vb)) => {
                Ok(Value::Timestamp(lerp_millis(*va, *vb, t, total)))
            }
            (
                Value::Composite {
                    tag: tag_a,
                    fields: fields_a,
                },
                Value::Composite {
                    tag: tag_b,
                    fields: fields_b,
                },
            ) => {
                if tag_a != tag_b {
                    return Err(InterpError::CompositeTagMismatch {
                        left: tag_a.clone(),
                        right: tag_b.clone(),
                    });
                }
                self.composite(tag_a, fields_a, fields_b, t, total)
            }
            _ => Err(InterpError::TypeMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }

    /// Recursive per-field interpolation driven by the tag's schema.
    fn composite(
        &self,
        tag: &str,
        fields_a: &hashbrown::HashMap<String, Value>,
        fields_b: &hashbrown::HashMap<String, Value>,
        t: f64,
        total: f64,
    ) -> Result<Value, InterpError> {
        let schema = self
            .schemas
            .get(tag)
            .ok_or_else(|| InterpError::UnknownComposite {
                tag: tag.to_string(),
            })?;

        let mut out = hashbrown::HashMap::with_capacity(schema.fields.len());
        for rule in &schema.fields {
            let missing = || InterpError::MissingField {
                tag: tag.to_string(),
                field: rule.name.clone(),
            };
            let fa = fields_a.get(&rule.name).ok_or_else(missing)?;
            let fb = fields_b.get(&rule.name).ok_or_else(missing)?;
            if fa.kind() != rule.kind || fb.kind() != rule.kind {
                return Err(InterpError::FieldKindMismatch {
                    tag: tag.to_string(),
                    field: rule.name.clone(),
                    declared: rule.kind,
                });
            }
            let blended = self.interpolate(fa, fb, t, total, rule.modulus)?;
            out.insert(rule.name.clone(), blended);
        }

        Ok(Value::Composite {
            tag: tag.to_string(),
            fields: out,
        })
    }
}
