use super::{MazeIoResult, TextSerializable, TokenReader};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Reads a whole value of type `T` from the named file.
pub fn load_file<T: TextSerializable>(path: impl AsRef<Path>) -> MazeIoResult<T> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = TokenReader::new(BufReader::new(file));
    let value = T::read_from(&mut reader)?;
    tracing::debug!("Loaded {} from {}", T::TYPE_NAME, path.display());
    Ok(value)
}

/// Writes `value` to the named file, replacing any previous content.
pub fn write_file<T: TextSerializable>(path: impl AsRef<Path>, value: &T) -> MazeIoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    value.write_to(&mut out)?;
    out.flush()?;
    tracing::debug!("Wrote {} to {}", T::TYPE_NAME, path.display());
    Ok(())
}
