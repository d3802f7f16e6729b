//! Turns a 2D floor plan into a textured 3D maze.

use crate::geometry::{Point3, Quad, TexturedQuad, Wall};
use crate::maze::{Maze2D, Maze3D};
use serde::{Deserialize, Serialize};

/// Dimensions used when extruding a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionConfig {
    pub wall_width: f64,
    pub wall_height: f64,
    /// Edge length of one square texture tile, in world units.
    pub texture_size: f64,
}

impl Default for ExtrusionConfig {
    fn default() -> Self {
        Self {
            wall_width: 10.0,
            wall_height: 50.0,
            texture_size: 50.0,
        }
    }
}

/// Extrudes every line of `maze` into a wall, in source order, using the
/// default texture tile size.
pub fn convert_2d_to_3d(maze: &Maze2D, wall_width: f64, wall_height: f64) -> Maze3D {
    convert_with(
        maze,
        &ExtrusionConfig {
            wall_width,
            wall_height,
            ..ExtrusionConfig::default()
        },
    )
}

pub fn convert_with(maze: &Maze2D, config: &ExtrusionConfig) -> Maze3D {
    let tile = config.texture_size;
    let mut res = Maze3D::new(floor_quad(maze, config));

    for line in maze.lines() {
        res.add_wall(Wall::fit_to_line(
            line,
            config.wall_width,
            config.wall_height,
            tile,
            tile,
        ));
    }

    tracing::debug!(
        "Extruded {} lines into {} walls ({}x{} floor)",
        maze.len(),
        res.number_of_walls(),
        maze.width(),
        maze.height()
    );
    res
}

/// The floor spans the maze rectangle at the walls' base height.
fn floor_quad(maze: &Maze2D, config: &ExtrusionConfig) -> TexturedQuad {
    let b = maze.bounds();
    let z = -config.wall_height / 2.0;
    let quad = Quad::new(
        Point3::new(b.min.x, b.min.y, z),
        Point3::new(b.min.x, b.max.y, z),
        Point3::new(b.max.x, b.max.y, z),
        Point3::new(b.max.x, b.min.y, z),
    );
    TexturedQuad::tiled(quad, config.texture_size, config.texture_size)
}
