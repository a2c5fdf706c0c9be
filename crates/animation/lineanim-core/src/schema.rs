//! Declarative interpolation schemas for composite values.
//!
//! Each composite tag maps to a field table describing how that type blends:
//! which kind every field must be and, for circular scalars, the wraparound
//! modulus. Adding a new composite type is a data-only change: register a
//! schema, no new interpolation code.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// How a single composite field interpolates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldRule {
    pub name: String,
    pub kind: ValueKind,
    /// Wraparound modulus for circular scalar fields (e.g. 360 for headings).
    #[serde(default)]
    pub modulus: Option<f64>,
}

impl FieldRule {
    pub fn plain(name: impl Into<String>, kind: ValueKind) -> Self {
        FieldRule {
            name: name.into(),
            kind,
            modulus: None,
        }
    }

    pub fn circular(name: impl Into<String>, modulus: f64) -> Self {
        FieldRule {
            name: name.into(),
            kind: ValueKind::Scalar,
            modulus: Some(modulus),
        }
    }
}

/// Field table for one composite tag. Field order is the declaration order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompositeSchema {
    pub tag: String,
    pub fields: Vec<FieldRule>,
}

impl CompositeSchema {
    /// Convenience: build a schema from (name, kind, modulus) triples.
    pub fn from_rules(
        tag: impl Into<String>,
        rules: impl IntoIterator<Item = FieldRule>,
    ) -> Self {
        CompositeSchema {
            tag: tag.into(),
            fields: rules.into_iter().collect(),
        }
    }
}

/// Registry of composite schemas, keyed by tag.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, CompositeSchema>,
}

/// Tag for the builtin point schema (x/y/z scalars).
pub const POINT_TAG: &str = "point";
/// Tag for the builtin camera pose schema (heading wraps at 360).
pub const CAMERA_TAG: &str = "camera";

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the builtin `point` and `camera` schemas.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(CompositeSchema::from_rules(
            POINT_TAG,
            [
                FieldRule::plain("x", ValueKind::Scalar),
                FieldRule::plain("y", ValueKind::Scalar),
                FieldRule::plain("z", ValueKind::Scalar),
            ],
        ));
        registry.register(CompositeSchema::from_rules(
            CAMERA_TAG,
            [
                FieldRule::circular("heading", 360.0),
                FieldRule::plain("tilt", ValueKind::Scalar),
                FieldRule::plain("position", ValueKind::Composite),
            ],
        ));
        registry
    }

    /// Register a schema, replacing any previous one under the same tag.
    pub fn register(&mut self, schema: CompositeSchema) -> Option<CompositeSchema> {
        self.schemas.insert(schema.tag.clone(), schema)
    }

    pub fn get(&self, tag: &str) -> Option<&CompositeSchema> {
        self.schemas.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.schemas.contains_key(tag)
    }
}
