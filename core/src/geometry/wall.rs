//! Extruded maze walls.
//!
//! A [`Wall`] is a rectangular prism built around one 2D center line. Its
//! four vertical faces rest on the maze plane and their bottom edges, taken
//! `p4 → p1`, walk the footprint clockwise so the wall's inside is always on
//! the right.

use super::quad::{Quad, TexturedQuad};
use super::segment::LineSegment2D;
use super::utils_2d::{perpendicular_ccw, point_in_parallelogram, project_onto};
use super::{dist_sq, flatten, Point2, Point3, Vector2};
use crate::io::{MazeIoResult, TextSerializable, TokenReader};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use thiserror::Error;

pub const QUADS_PER_WALL: usize = 5;
pub const VERTICES_PER_WALL: usize = 8;

/// A point or travel path touches no wall.
///
/// This is the normal, unobstructed outcome of a collision query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no collision detected")]
pub struct NoCollisionDetected;

/// Names the vertical faces of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Front,
    Back,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wall {
    pub front_end: TexturedQuad,
    pub back_end: TexturedQuad,
    pub left_side: TexturedQuad,
    pub right_side: TexturedQuad,
    pub top: TexturedQuad,
}

impl Wall {
    /// Builds the prism that straddles `line`, `wall_width` wide and
    /// `wall_height` tall, centred on `z = 0`.
    ///
    /// The front end sits on `line.p1`, the back end on `line.p2`. Faces
    /// share their corner points exactly.
    pub fn fit_to_line(
        line: &LineSegment2D,
        wall_width: f64,
        wall_height: f64,
        texture_width: f64,
        texture_height: f64,
    ) -> Self {
        let offset = perpendicular_ccw(&line.direction())
            .try_normalize(0.0)
            .unwrap_or_else(Vector2::zeros)
            * (wall_width / 2.0);

        let low = -wall_height / 2.0;
        let high = wall_height / 2.0;
        let at = |p: Point2, z: f64| Point3::new(p.x, p.y, z);

        let left_of_p1 = line.p1 + offset;
        let right_of_p1 = line.p1 - offset;
        let left_of_p2 = line.p2 + offset;
        let right_of_p2 = line.p2 - offset;

        let a1 = at(left_of_p1, low);
        let b1 = at(left_of_p1, high);
        let c1 = at(right_of_p1, high);
        let d1 = at(right_of_p1, low);

        let a2 = at(right_of_p2, low);
        let b2 = at(right_of_p2, high);
        let c2 = at(left_of_p2, high);
        let d2 = at(left_of_p2, low);

        let tile = |q: Quad| TexturedQuad::tiled(q, texture_width, texture_height);

        Self {
            front_end: tile(Quad::new(a1, b1, c1, d1)),
            back_end: tile(Quad::new(a2, b2, c2, d2)),
            right_side: tile(Quad::new(d1, c1, b2, a2)),
            left_side: tile(Quad::new(d2, c2, b1, a1)),
            top: tile(Quad::new(b1, c2, b2, c1)),
        }
    }

    /// All five faces in emission order: front, right, left, back, top.
    pub fn faces(&self) -> [&TexturedQuad; QUADS_PER_WALL] {
        [
            &self.front_end,
            &self.right_side,
            &self.left_side,
            &self.back_end,
            &self.top,
        ]
    }

    pub fn side(&self, side: WallSide) -> &TexturedQuad {
        match side {
            WallSide::Front => &self.front_end,
            WallSide::Back => &self.back_end,
            WallSide::Left => &self.left_side,
            WallSide::Right => &self.right_side,
        }
    }

    /// Bottom edge of a vertical face, directed `p4 → p1`.
    pub fn base_edge(&self, side: WallSide) -> LineSegment2D {
        let quad = &self.side(side).quad;
        LineSegment2D::new(flatten(quad.p4()), flatten(quad.p1()))
    }

    /// True iff `point` lies within the wall's footprint, ignoring height.
    /// Points exactly on the footprint's border count as inside.
    pub fn is_inside_me(&self, point: &Point2) -> bool {
        let top = &self.top.quad;
        let origin = flatten(top.p1());
        let u = flatten(top.p2()) - origin;
        let v = flatten(top.p4()) - origin;
        point_in_parallelogram(&origin, &u, &v, point)
    }

    /// The base edge that `travel` crosses first on its way from `p1` to `p2`.
    ///
    /// Sides are checked left, right, front, back; a later side only wins
    /// when it is strictly closer to the start of travel.
    pub fn collision_surface(&self, travel: &LineSegment2D) -> Result<LineSegment2D, NoCollisionDetected> {
        let mut closest: Option<(f64, LineSegment2D)> = None;

        for side in [WallSide::Left, WallSide::Right, WallSide::Front, WallSide::Back] {
            let edge = self.base_edge(side);
            let Ok(hit) = travel.intersection(&edge) else {
                continue;
            };

            let d = dist_sq(&travel.p1, &hit);
            if closest.map_or(true, |(best, _)| d < best) {
                closest = Some((d, edge));
            }
        }

        closest.map(|(_, edge)| edge).ok_or(NoCollisionDetected)
    }

    /// Motion left over after running into this wall along `travel`.
    ///
    /// Without a hit the whole travel vector comes back. Otherwise the travel
    /// vector is projected onto the edge that was hit, so the mover slides
    /// along the wall.
    pub fn resolve_collision(&self, travel: &LineSegment2D) -> Vector2 {
        match self.collision_surface(travel) {
            Ok(edge) => project_onto(&travel.direction(), &edge.direction()),
            Err(NoCollisionDetected) => travel.direction(),
        }
    }
}

impl TextSerializable for Wall {
    const TYPE_NAME: &'static str = "3D Wall";

    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self> {
        let front_end = TexturedQuad::read_from(reader)?;
        let right_side = TexturedQuad::read_from(reader)?;
        let left_side = TexturedQuad::read_from(reader)?;
        let back_end = TexturedQuad::read_from(reader)?;
        let top = TexturedQuad::read_from(reader)?;
        Ok(Self {
            front_end,
            back_end,
            left_side,
            right_side,
            top,
        })
    }

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()> {
        for face in self.faces() {
            face.write_to(out)?;
        }
        Ok(())
    }
}
