use nalgebra as na;

pub type Point2 = na::Point2<f64>;
pub type Vector2 = na::Vector2<f64>;
pub type Point3 = na::Point3<f64>;
pub type Vector3 = na::Vector3<f64>;
pub type Matrix4 = na::Matrix4<f64>;

pub const EPSILON: f64 = 1e-6;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for Point2 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).norm_squared() < EPSILON * EPSILON
    }
}

impl ApproxEq for Point3 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

pub mod utils_2d;

pub mod primitives;
pub use primitives::Aabb2;

pub mod intersection;
pub use intersection::LinesDontIntersectOnce;

pub mod segment;
pub use segment::LineSegment2D;

pub mod quad;
pub use quad::{Quad, TexturedQuad};

pub mod wall;
pub use wall::{NoCollisionDetected, Wall, WallSide};

pub mod tessellation;
pub use tessellation::{DrawBatch, SurfaceKind, Tessellation};

#[cfg(test)]
mod tests_wall;

pub fn dist_sq(p1: &Point2, p2: &Point2) -> f64 {
    na::distance_squared(p1, p2)
}

/// Drops the height axis of a 3D point.
pub fn flatten(p: &Point3) -> Point2 {
    Point2::new(p.x, p.y)
}
