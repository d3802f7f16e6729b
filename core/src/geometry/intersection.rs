//! 2D line intersection calculations for maze walls

use super::primitives::Aabb2;
use super::utils_2d::determinant;
use super::Point2;
use thiserror::Error;

/// Two lines are parallel, or their crossing lies outside a segment.
///
/// Collision code treats this as "no hit on this edge", so it never reaches
/// the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lines do not intersect exactly once")]
pub struct LinesDontIntersectOnce;

/// Intersection point of two infinite lines, each given by two points.
///
/// Uses the determinant form:
/// `x = |d1 x1-x2; d2 x3-x4| / d3`, `y = |d1 y1-y2; d2 y3-y4| / d3`
/// with `d1 = |x1 y1; x2 y2|`, `d2 = |x3 y3; x4 y4|` and
/// `d3 = |x1-x2 y1-y2; x3-x4 y3-y4|`. A zero `d3` means parallel lines,
/// with no epsilon.
pub fn line_line_intersection_extended(
    a1: &Point2, a2: &Point2,
    b1: &Point2, b2: &Point2,
) -> Result<Point2, LinesDontIntersectOnce> {
    let d3 = determinant(a1.x - a2.x, a1.y - a2.y, b1.x - b2.x, b1.y - b2.y);
    if d3 == 0.0 {
        return Err(LinesDontIntersectOnce);
    }

    let d1 = determinant(a1.x, a1.y, a2.x, a2.y);
    let d2 = determinant(b1.x, b1.y, b2.x, b2.y);

    let x = determinant(d1, a1.x - a2.x, d2, b1.x - b2.x) / d3;
    let y = determinant(d1, a1.y - a2.y, d2, b1.y - b2.y) / d3;

    Ok(Point2::new(x, y))
}

/// Intersection point of two segments.
///
/// The crossing of the extended lines must also fall inside both segments'
/// bounding boxes (lenient by a rounding slack).
pub fn line_line_intersection(
    a1: &Point2, a2: &Point2,
    b1: &Point2, b2: &Point2,
) -> Result<Point2, LinesDontIntersectOnce> {
    let p = line_line_intersection_extended(a1, a2, b1, b2)?;

    if Aabb2::from_corners(a1, a2).contains_lenient(&p)
        && Aabb2::from_corners(b1, b2).contains_lenient(&p)
    {
        Ok(p)
    } else {
        Err(LinesDontIntersectOnce)
    }
}
