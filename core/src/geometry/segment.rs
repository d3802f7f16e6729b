use super::intersection::{line_line_intersection, line_line_intersection_extended, LinesDontIntersectOnce};
use super::primitives::Aabb2;
use super::utils_2d::cross_2d;
use super::{Point2, Vector2};
use crate::io::{MazeIoResult, TextSerializable, TokenReader};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Slope reported for vertical segments.
pub const INFINITE_SLOPE: f64 = f64::MAX;

/// A directed segment of a 2D line.
///
/// Travelling from `p1` to `p2` defines which side is "right"; the wall
/// code relies on that to tell inside from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment2D {
    pub p1: Point2,
    pub p2: Point2,
}

impl Default for LineSegment2D {
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::origin())
    }
}

impl LineSegment2D {
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Displacement from `p1` to `p2`.
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// Δy/Δx, or [`INFINITE_SLOPE`] when the segment is vertical.
    pub fn slope(&self) -> f64 {
        let d = self.direction();
        if d.x != 0.0 {
            d.y / d.x
        } else {
            INFINITE_SLOPE
        }
    }

    /// True iff `point` lies strictly to the right when walking from `p1` to `p2`.
    /// Points on the line itself are not to the right.
    pub fn is_to_the_right_of_me(&self, point: &Point2) -> bool {
        cross_2d(&self.direction(), &(point - self.p1)) < 0.0
    }

    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2::from_corners(&self.p1, &self.p2)
    }

    /// Whether `point` falls inside this segment's (slightly widened) bounding box.
    pub fn within_bounding_box(&self, point: &Point2) -> bool {
        self.bounding_box().contains_lenient(point)
    }

    /// Crossing of the two lines as if they were infinitely long.
    pub fn intersection_extended(&self, other: &LineSegment2D) -> Result<Point2, LinesDontIntersectOnce> {
        line_line_intersection_extended(&self.p1, &self.p2, &other.p1, &other.p2)
    }

    /// Crossing of the two segments.
    pub fn intersection(&self, other: &LineSegment2D) -> Result<Point2, LinesDontIntersectOnce> {
        line_line_intersection(&self.p1, &self.p2, &other.p1, &other.p2)
    }
}

impl From<LineSegment2D> for Vector2 {
    fn from(line: LineSegment2D) -> Self {
        line.direction()
    }
}

impl TextSerializable for LineSegment2D {
    const TYPE_NAME: &'static str = "2D Line Segment";

    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self> {
        let p1 = Point2::read_from(reader)?;
        let p2 = Point2::read_from(reader)?;
        Ok(Self::new(p1, p2))
    }

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()> {
        self.p1.write_to(out)?;
        write!(out, "      ")?;
        self.p2.write_to(out)
    }
}
