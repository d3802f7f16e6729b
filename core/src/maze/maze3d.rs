use crate::geometry::quad::VERTICES_PER_QUAD;
use crate::geometry::wall::QUADS_PER_WALL;
use crate::geometry::{NoCollisionDetected, Point2, SurfaceKind, Tessellation, TexturedQuad, Wall};
use crate::io::{MazeIoError, MazeIoResult, TextSerializable, TokenReader};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::warn;

/// Render-ready maze: one floor quad plus the extruded walls.
///
/// This is a derived snapshot of a [`super::Maze2D`]; it is rebuilt rather
/// than edited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Maze3D {
    walls: Vec<Wall>,
    floor: TexturedQuad,
}

impl Maze3D {
    pub fn new(floor: TexturedQuad) -> Self {
        Self {
            walls: Vec::new(),
            floor,
        }
    }

    pub fn add_wall(&mut self, wall: Wall) {
        self.walls.push(wall);
    }

    pub fn wall(&self, index: usize) -> Option<&Wall> {
        self.walls.get(index)
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn number_of_walls(&self) -> usize {
        self.walls.len()
    }

    pub fn floor(&self) -> &TexturedQuad {
        &self.floor
    }

    pub fn set_floor(&mut self, floor: TexturedQuad) {
        self.floor = floor;
    }

    pub fn quad_count(&self) -> usize {
        self.walls.len() * QUADS_PER_WALL + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.quad_count() * VERTICES_PER_QUAD
    }

    /// First wall, in insertion order, whose footprint holds `point`.
    /// Height is ignored, so a point above a wall still hits it.
    pub fn detect_collision(&self, point: &Point2) -> Result<&Wall, NoCollisionDetected> {
        self.walls
            .iter()
            .find(|wall| wall.is_inside_me(point))
            .ok_or(NoCollisionDetected)
    }

    /// Every quad in draw order: the floor first, then each wall's faces.
    pub fn render_batches(&self) -> impl Iterator<Item = (SurfaceKind, &TexturedQuad)> {
        std::iter::once((SurfaceKind::Floor, &self.floor)).chain(
            self.walls
                .iter()
                .flat_map(|wall| wall.faces().into_iter().map(|face| (SurfaceKind::Wall, face))),
        )
    }

    pub fn tessellate(&self) -> Tessellation {
        let mut tess = Tessellation::new();
        for (surface, quad) in self.render_batches() {
            tess.add_quad(quad, surface);
        }
        tess
    }
}

/// Number of walls implied by a `vertexCount quadCount` header, or why it is inconsistent.
fn walls_from_header(vertex_count: usize, quad_count: usize) -> MazeIoResult<usize> {
    if quad_count == 0 || (quad_count - 1) % QUADS_PER_WALL != 0 {
        return Err(MazeIoError::Malformed(format!(
            "quad count {} is not 5 * walls + 1",
            quad_count
        )));
    }
    let walls_by_quads = (quad_count - 1) / QUADS_PER_WALL;

    let per_wall = QUADS_PER_WALL * VERTICES_PER_QUAD;
    let walls_by_vertices = vertex_count
        .checked_sub(VERTICES_PER_QUAD)
        .filter(|rest| rest % per_wall == 0)
        .map(|rest| rest / per_wall);

    match walls_by_vertices {
        Some(n) if n == walls_by_quads => Ok(n),
        _ => Err(MazeIoError::Malformed(format!(
            "{} vertices do not match {} quads",
            vertex_count, quad_count
        ))),
    }
}

impl TextSerializable for Maze3D {
    const TYPE_NAME: &'static str = "3D Maze";

    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self> {
        let vertex_count = reader.next_value::<usize>("vertex count")?;
        let quad_count = reader.next_value::<usize>("quad count")?;
        let wall_count = walls_from_header(vertex_count, quad_count).map_err(|e| {
            warn!("Rejected 3D maze header: {}", e);
            e
        })?;

        let floor = TexturedQuad::read_from(reader)?;
        let mut maze = Maze3D::new(floor);
        for _ in 0..wall_count {
            maze.add_wall(Wall::read_from(reader)?);
        }

        for i in 0..quad_count {
            reader.expect_marker("q")?;
            for j in 0..VERTICES_PER_QUAD {
                let index = reader.next_value::<usize>("face index")?;
                if index != i * VERTICES_PER_QUAD + j {
                    warn!("Face {} of 3D maze references vertex {}", i, index);
                    return Err(MazeIoError::Malformed(format!(
                        "face {} references vertex {}",
                        i, index
                    )));
                }
            }
        }

        Ok(maze)
    }

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()> {
        writeln!(out, "{} {}", self.vertex_count(), self.quad_count())?;
        self.floor.write_to(out)?;
        for wall in &self.walls {
            wall.write_to(out)?;
        }
        writeln!(out)?;

        for i in 0..self.quad_count() {
            write!(out, "q ")?;
            for j in 0..VERTICES_PER_QUAD {
                write!(out, "{} ", i * VERTICES_PER_QUAD + j)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
