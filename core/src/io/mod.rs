//! Plain-text persistence for maze geometry.
//!
//! Every persisted type implements [`TextSerializable`]. Values are written
//! as whitespace separated tokens, so readers only care about token order,
//! never about line breaks.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub mod files;
pub use files::{load_file, write_file};

mod points;

/// Errors raised while reading or writing persisted geometry.
#[derive(Debug, Error)]
pub enum MazeIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Malformed data: {0}")]
    Malformed(String),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for persistence operations.
pub type MazeIoResult<T> = Result<T, MazeIoError>;

/// A value that can be written to and rebuilt from the text format.
pub trait TextSerializable: Sized {
    /// Human readable name, used in log lines.
    const TYPE_NAME: &'static str;

    fn read_from<R: BufRead>(reader: &mut TokenReader<R>) -> MazeIoResult<Self>;

    fn write_to<W: Write>(&self, out: &mut W) -> MazeIoResult<()>;

    fn to_text(&self) -> MazeIoResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| MazeIoError::Malformed(e.to_string()))
    }

    fn from_text(text: &str) -> MazeIoResult<Self> {
        let mut reader = TokenReader::new(text.as_bytes());
        Self::read_from(&mut reader)
    }
}

/// Pulls whitespace separated tokens out of a buffered stream, one line at a time.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the stream is exhausted.
    pub fn try_next_token(&mut self) -> MazeIoResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    pub fn next_token(&mut self, what: &'static str) -> MazeIoResult<String> {
        self.try_next_token()?.ok_or(MazeIoError::UnexpectedEof(what))
    }

    pub fn next_value<T: FromStr>(&mut self, what: &'static str) -> MazeIoResult<T> {
        let token = self.next_token(what)?;
        token.parse::<T>().map_err(|_| MazeIoError::InvalidNumber(token))
    }

    pub fn next_f64(&mut self, what: &'static str) -> MazeIoResult<f64> {
        self.next_value::<f64>(what)
    }

    /// Consumes a single-character record marker such as `v` or `q`.
    pub fn expect_marker(&mut self, marker: &str) -> MazeIoResult<()> {
        let token = self.next_token("record marker")?;
        if token == marker {
            Ok(())
        } else {
            warn!("Expected '{}' record, found '{}'", marker, token);
            Err(MazeIoError::Malformed(format!(
                "expected '{}' record, found '{}'",
                marker, token
            )))
        }
    }
}
