//! 2D vector helpers shared by the segment, wall and first-person code.
//!
//! Everything here works on the nalgebra aliases from [`super`] so callers
//! never have to unpack coordinates by hand.

use super::{Point2, Vector2};

/// Slack used when deciding whether a point lies inside a segment's bounding box.
pub const BOUNDS_SMUDGE: f64 = 0.001;

// =============================================================================
// Vector Operations
// =============================================================================

/// 2D cross product (z-component of the 3D cross product).
/// Positive if v2 is counter-clockwise from v1.
#[inline]
pub fn cross_2d(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Determinant of the 2x2 matrix `| a b ; c d |`.
#[inline]
pub fn determinant(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - c * b
}

/// Perpendicular vector (90° counter-clockwise rotation).
#[inline]
pub fn perpendicular_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Perpendicular vector (90° clockwise rotation).
#[inline]
pub fn perpendicular_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Vector projection of `v` onto `onto`.
/// Returns the zero vector when `onto` has no length.
pub fn project_onto(v: &Vector2, onto: &Vector2) -> Vector2 {
    let len_sq = onto.norm_squared();
    if len_sq > 0.0 {
        onto * (onto.dot(v) / len_sq)
    } else {
        Vector2::zeros()
    }
}

/// Unit heading for a yaw angle in degrees, where 0° points along -Z of the
/// world (encoded here as `(sin, -cos)` in the x/z plane).
#[inline]
pub fn heading(yaw_degrees: f64) -> Vector2 {
    let r = yaw_degrees.to_radians();
    Vector2::new(r.sin(), -r.cos())
}

// =============================================================================
// Range Tests
// =============================================================================

/// True iff `x` lies in `[a, b]`, widened by [`BOUNDS_SMUDGE`] on both ends.
#[inline]
pub fn within_bounds(x: f64, a: f64, b: f64) -> bool {
    x >= a - BOUNDS_SMUDGE && x <= b + BOUNDS_SMUDGE
}

/// Point-in-rectangle test by projecting onto the rectangle's two edge vectors.
///
/// `u` and `v` are the edges leaving `origin`. Boundaries are inclusive.
/// A parallelogram with a zero-length edge has no area and holds nothing.
pub fn point_in_parallelogram(origin: &Point2, u: &Vector2, v: &Vector2, point: &Point2) -> bool {
    if u.norm_squared() == 0.0 || v.norm_squared() == 0.0 {
        return false;
    }
    let w = point - origin;
    let wu = w.dot(u);
    let wv = w.dot(v);
    (0.0..=u.norm_squared()).contains(&wu) && (0.0..=v.norm_squared()).contains(&wv)
}

/// Midpoint between two points.
#[inline]
pub fn midpoint(p1: &Point2, p2: &Point2) -> Point2 {
    Point2::from((p1.coords + p2.coords) * 0.5)
}

// =============================================================================
// Tests
// =============================================================================
