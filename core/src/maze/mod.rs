//! Maze containers: the editable 2D floor plan and its extruded 3D form.

pub mod maze2d;
pub use maze2d::{Maze2D, OUTER_WALL_COUNT};

pub mod maze3d;
pub use maze3d::Maze3D;
