use super::utils_2d::within_bounds;
use super::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle in the maze plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box holding both points, in any order.
    pub fn from_corners(a: &Point2, b: &Point2) -> Self {
        let mut res = Self::empty();
        res.extend(a);
        res.extend(b);
        res
    }

    pub fn extend(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);

        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y
    }

    /// Like [`Aabb2::contains`], but lenient by the rounding slack of
    /// [`within_bounds`] so near-endpoint hits are not lost.
    pub fn contains_lenient(&self, p: &Point2) -> bool {
        within_bounds(p.x, self.min.x, self.max.x) && within_bounds(p.y, self.min.y, self.max.y)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
