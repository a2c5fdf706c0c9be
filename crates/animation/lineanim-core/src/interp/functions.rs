//! Scalar interpolation helpers:
//! - wrap_delta (shorter-arc delta for circular quantities)
//! - lerp_f64 (normalized lerp with optional wraparound)
//! - lerp_millis (epoch-millisecond lerp for timestamps)
//!
//! Callers are expected to have rejected `total == 0` already; these helpers
//! assume a non-zero normalization span.

/// Signed delta `b - a`, reduced into `(-m/2, m/2]` when a modulus is given.
///
/// Picks the shorter arc around a circular quantity: heading 350 -> 10 moves
/// +20 through 360/0, not -340 the long way round.
#[inline]
pub fn wrap_delta(a: f64, b: f64, modulus: Option<f64>) -> f64 {
    let mut d = b - a;
    if let Some(m) = modulus {
        if d > m / 2.0 {
            d -= m;
        } else if d < -m / 2.0 {
            d += m;
        }
    }
    d
}

/// Interpolate `t / total` of the way from `a` to `b`.
///
/// With a modulus the delta takes the shorter arc and interior results are
/// canonicalized into `[0, m)` (heading 350 -> 10 passes through 0, not 180).
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64, total: f64, modulus: Option<f64>) -> f64 {
    let s = t / total;
    let d = wrap_delta(a, b, modulus);
    // Endpoints and stationary spans reproduce the operands exactly.
    if s == 0.0 || d == 0.0 {
        return a;
    }
    if s == 1.0 {
        return b;
    }
    let out = a + d * s;
    match modulus {
        Some(m) => out.rem_euclid(m),
        None => out,
    }
}

/// Timestamp rule: lerp epoch milliseconds linearly, rounding back to whole
/// milliseconds. Circular wrap never applies to time.
#[inline]
pub fn lerp_millis(a: i64, b: i64, t: f64, total: f64) -> i64 {
    lerp_f64(a as f64, b as f64, t, total, None).round() as i64
}
