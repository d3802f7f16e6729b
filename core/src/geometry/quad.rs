use super::{Point2, Point3};
use crate::io::{MazeIoResult, TextSerializable, TokenReader};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

pub const VERTICES_PER_QUAD: usize = 4;

/// A flat 3D rectangle given by four corners in winding order.
///
/// By convention the corners run bottom-left, top-left, top-right,
/// bottom-right as seen from the face's outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub corners: [Point3; VERTICES_PER_QUAD],
}

impl Default for Quad {
    fn default() -> Self {
        Self {
            corners: [Point3::origin(); VERTICES_PER_QUAD],
        }
    }
}

impl Quad {
    pub fn new(p1: Point3, p2: Point3, p3: Point3, p4: Point3) -> Self {
        Self {
            corners: [p1, p2, p3, p4],
        }
    }

    pub fn p1(&self) -> &Point3 { &self.corners[0] }
    pub fn p2(&self) -> &Point3 { &self.corners[1] }
    pub fn p3(&self) -> &Point3 { &self.corners[2] }
    pub fn p4(&self) -> &Point3 { &self.corners[3] }

    /// Length of the p1→p2 edge.
    pub fn height(&self) -> f64 {
        na::distance(self.p1(), self.p2())
    }

    /// Length of the p1→p4 edge.
    pub fn width(&self) -> f64 {
        na::distance(self.p1(), self.p4())
    }
}

/// A [`Quad`] plus one texture coordinate per corner, in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TexturedQuad {
    pub quad: Quad,
    pub tex_coords: [Point2; VERTICES_PER_QUAD],
}

impl Default for TexturedQuad {
    fn default() -> Self {
        Self {
            quad: Quad::default(),
            tex_coords: [Point2::origin(); VERTICES_PER_QUAD],
        }
    }
}

impl TexturedQuad {
    pub fn new(quad: Quad, tex_coords: [Point2; VERTICES_PER_QUAD]) -> Self {
        Self { quad, tex_coords }
    }

    /// Texture coordinates chosen so a `texture_width` x `texture_height`
    /// tile repeats across the face instead of stretching over it.
    pub fn tiled(quad: Quad, texture_width: f64, texture_height: f64) -> Self {
        let s = quad.width() / texture_width;
        let t = quad.height() / texture_height;
        Self {
            quad,
            tex_coords: [
                Point2::new(0.0, t),
                Point2::new(0.0, 0.0),
                Point2::new(s, 0.0),
                Point2::new(s, t),
            ],
        }
    }

    pub fn corners(&self) -> &[Point3; VERTICES_PER_QUAD] {
        &self.quad.corners
    }

    /// (position, texture coordinate) pairs in winding order.
    pub fn vertices(&self) -> [(Point3, Point2); VERTICES_PER_QUAD] {
        std::array::from_fn(|i| (self.quad.corners[i], self.tex_coords[i]))
    }
}

impl TextSerializable for TexturedQuad {
    const TYPE_NAME: &'static str = "Textured Quad";

    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self> {
        let mut res = Self::default();
        for i in 0..VERTICES_PER_QUAD {
            reader.expect_marker("v")?;
            res.quad.corners[i] = Point3::read_from(reader)?;
            res.tex_coords[i] = Point2::read_from(reader)?;
        }
        Ok(res)
    }

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()> {
        for (pos, tex) in self.vertices() {
            write!(out, "v ")?;
            pos.write_to(out)?;
            write!(out, " ")?;
            tex.write_to(out)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
