use super::{MazeIoResult, TextSerializable, TokenReader};
use crate::geometry::{Point2, Point3};
use std::io::{BufRead, Write};

impl TextSerializable for Point2 {
    const TYPE_NAME: &'static str = "2D Point";

    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self> {
        let x = reader.next_f64("point x")?;
        let y = reader.next_f64("point y")?;
        Ok(Point2::new(x, y))
    }

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()> {
        write!(out, "{} {}", self.x, self.y)?;
        Ok(())
    }
}

impl TextSerializable for Point3 {
    const TYPE_NAME: &'static str = "3D Point";

    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self> {
        let x = reader.next_f64("point x")?;
        let y = reader.next_f64("point y")?;
        let z = reader.next_f64("point z")?;
        Ok(Point3::new(x, y, z))
    }

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()> {
        write!(out, "{} {} {}", self.x, self.y, self.z)?;
        Ok(())
    }
}
