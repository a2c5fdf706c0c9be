//! Parametric path sampling.
//!
//! A [`Path`] is built once from an ordered vertex list and a distance
//! function, precomputing cumulative arc lengths. [`Path::sample_at`] then
//! answers "truncated path at progress t" queries: the prefix of vertices up
//! to the straddling segment plus one freshly interpolated tail point.
//! Paths are immutable after build; changed geometry means a new build.

use serde::{Deserialize, Serialize};

use crate::interp::functions::lerp_f64;

/// A 2D or 3D path vertex. Immutable once stored in a [`Path`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: Option<f64>,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Vertex { x, y, z: None }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Vertex { x, y, z: Some(z) }
    }

    /// Coordinate-wise lerp at fraction `t`. The z coordinate participates
    /// only when both endpoints carry one.
    pub fn lerp(a: &Vertex, b: &Vertex, t: f64) -> Vertex {
        Vertex {
            x: lerp_f64(a.x, b.x, t, 1.0, None),
            y: lerp_f64(a.y, b.y, t, 1.0, None),
            z: match (a.z, b.z) {
                (Some(za), Some(zb)) => Some(lerp_f64(za, zb, t, 1.0, None)),
                _ => None,
            },
        }
    }
}

/// Straight-line distance between two vertices (3D when both have z).
///
/// The default distance function for [`Path::build`]; callers working in a
/// projected or geodesic frame supply their own.
pub fn euclidean_distance(a: &Vertex, b: &Vertex) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = match (a.z, b.z) {
        (Some(za), Some(zb)) => zb - za,
        _ => 0.0,
    };
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// An immutable polyline with precomputed cumulative arc lengths.
///
/// `cum[0] = 0`, `cum[i] = cum[i-1] + distance(v[i-1], v[i])`; `seg[i]` is the
/// length of the segment leaving vertex `i`. `cum` is non-decreasing and
/// `cum[last]` is the total length (0 for degenerate paths).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Path {
    vertices: Vec<Vertex>,
    cum: Vec<f64>,
    seg: Vec<f64>,
}

impl Path {
    /// Build a path from a vertex list and a symmetric, non-negative distance
    /// function. Accepts empty and single-vertex input; never fails.
    pub fn build<F>(vertices: Vec<Vertex>, distance: F) -> Path
    where
        F: Fn(&Vertex, &Vertex) -> f64,
    {
        let mut cum = Vec::with_capacity(vertices.len());
        let mut seg = Vec::with_capacity(vertices.len().saturating_sub(1));
        for (i, v) in vertices.iter().enumerate() {
            if i == 0 {
                cum.push(0.0);
            } else {
                let d = distance(&vertices[i - 1], v);
                seg.push(d);
                cum.push(cum[i - 1] + d);
            }
        }
        log::debug!(
            "built path: {} vertices, total length {}",
            vertices.len(),
            cum.last().copied().unwrap_or(0.0)
        );
        Path { vertices, cum, seg }
    }

    /// Build with [`euclidean_distance`].
    pub fn from_vertices(vertices: Vec<Vertex>) -> Path {
        Path::build(vertices, euclidean_distance)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Cumulative arc length at each vertex.
    pub fn cumulative(&self) -> &[f64] {
        &self.cum
    }

    /// Total arc length (0 for paths with fewer than 2 vertices).
    pub fn total_length(&self) -> f64 {
        self.cum.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Truncated path at normalized progress.
    ///
    /// Progress is clamped to [0, 1]; the absolute target distance is
    /// `total_length * progress`. Output is the prefix of vertices before the
    /// target plus one point interpolated inside the straddling segment, so
    /// for growing progress earlier outputs are prefixes of later ones.
    /// `sample_at(0)` is exactly the first vertex and `sample_at(1)` the full
    /// vertex sequence. Paths with fewer than 2 vertices are returned
    /// unchanged.
    pub fn sample_at(&self, progress: f64) -> Vec<Vertex> {
        let n = self.vertices.len();
        if n < 2 {
            return self.vertices.clone();
        }

        let target = self.total_length() * progress.clamp(0.0, 1.0);

        // Straddling segment: greatest i with cum[i] < target, i.e. the
        // segment satisfying cum[i] < target <= cum[i+1] (segment 0 when the
        // target sits at the path start).
        let i = self
            .cum
            .partition_point(|&d| d < target)
            .saturating_sub(1)
            .min(n - 2);

        let mut out = self.vertices[..=i].to_vec();

        // Coincident consecutive vertices make a zero-length segment; the
        // local fraction collapses to 0 there instead of dividing by zero.
        let fraction = if self.seg[i] > 0.0 {
            (target - self.cum[i]) / self.seg[i]
        } else {
            0.0
        };
        let tail = Vertex::lerp(&self.vertices[i], &self.vertices[i + 1], fraction);

        // A tail that lands exactly on the last collected vertex adds no
        // geometry; dropping it keeps sample_at(0) == [vertices[0]].
        if out.last() != Some(&tail) {
            out.push(tail);
        }
        out
    }
}
