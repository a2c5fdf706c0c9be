//! lineanim-core (renderer-agnostic)
//!
//! Core logic for animating line features by drawing them progressively along
//! their arc length: an immutable [`Path`] answering truncated-path queries
//! at a normalized progress, a typed [`Interpolator`] blending scalars,
//! vectors, timestamps and schema-driven composites (with shorter-arc
//! handling for circular quantities such as compass headings), and a
//! latest-wins [`SeekQueue`]/[`LineAnimator`] pair coalescing high-frequency
//! seek requests. Rendering, feature storage and view wiring live in
//! adapters, not here.

pub mod error;
pub mod interp;
pub mod path;
pub mod schema;
pub mod seek;
pub mod value;

// Re-exports for consumers (adapters)
pub use error::InterpError;
pub use interp::Interpolator;
pub use path::{euclidean_distance, Path, Vertex};
pub use schema::{CompositeSchema, FieldRule, SchemaRegistry, CAMERA_TAG, POINT_TAG};
pub use seek::{LineAnimator, ObjectId, SeekQueue};
pub use value::{Value, ValueKind};
