use crate::geometry::{Aabb2, LineSegment2D, Point2};
use crate::io::{MazeIoError, MazeIoResult, TextSerializable, TokenReader};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::warn;

/// Number of boundary lines every maze starts with.
pub const OUTER_WALL_COUNT: usize = 4;

/// Editable floor plan: an ordered list of wall center lines inside a
/// `width` x `height` rectangle centred on the origin.
///
/// Lines keep insertion order. The first [`OUTER_WALL_COUNT`] lines are the
/// bounding rectangle; [`Maze2D::clear`] puts them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze2D {
    width: i32,
    height: i32,
    lines: Vec<LineSegment2D>,
}

impl Default for Maze2D {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Maze2D {
    pub fn new(width: i32, height: i32) -> Self {
        let mut maze = Self {
            width,
            height,
            lines: Vec::new(),
        };
        maze.add_outer_walls();
        maze
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn add_line(&mut self, line: LineSegment2D) {
        self.lines.push(line);
    }

    pub fn line(&self, index: usize) -> Option<&LineSegment2D> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[LineSegment2D] {
        &self.lines
    }

    /// Lines added after the bounding rectangle.
    pub fn interior_lines(&self) -> &[LineSegment2D] {
        self.lines.get(OUTER_WALL_COUNT..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes every line except the bounding rectangle.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.add_outer_walls();
    }

    /// The bounding rectangle as a box.
    pub fn bounds(&self) -> Aabb2 {
        let (hw, hh) = self.half_extents();
        Aabb2::new(Point2::new(-hw, -hh), Point2::new(hw, hh))
    }

    fn half_extents(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    fn add_outer_walls(&mut self) {
        let (hw, hh) = self.half_extents();
        let bottom_left = Point2::new(-hw, -hh);
        let top_left = Point2::new(-hw, hh);
        let top_right = Point2::new(hw, hh);
        let bottom_right = Point2::new(hw, -hh);

        self.add_line(LineSegment2D::new(bottom_left, top_left));
        self.add_line(LineSegment2D::new(top_right, top_left));
        self.add_line(LineSegment2D::new(top_right, bottom_right));
        self.add_line(LineSegment2D::new(bottom_left, bottom_right));
    }
}

impl TextSerializable for Maze2D {
    const TYPE_NAME: &'static str = "2D Maze";

    /// The stored line list already contains the bounding rectangle, so it is
    /// taken as-is.
    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self> {
        let width = reader.next_value::<i32>("maze width")?;
        let height = reader.next_value::<i32>("maze height")?;
        let count = reader.next_value::<i64>("line count")?;
        if count < 0 {
            warn!("2D maze declares a negative line count ({})", count);
            return Err(MazeIoError::Malformed(format!("negative line count {}", count)));
        }

        // Grows as lines arrive; the declared count is not trusted
        let mut lines = Vec::new();
        for _ in 0..count {
            lines.push(LineSegment2D::read_from(reader)?);
        }

        Ok(Self { width, height, lines })
    }

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()> {
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "{}", self.lines.len())?;
        for line in &self.lines {
            line.write_to(out)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
