//! Tab-separated region file reader
//!
//! Each non-blank line of a region file describes one clickable area:
//!
//! ```text
//! x<TAB>y<TAB>rx<TAB>ry<TAB>title<TAB>href
//! ```
//!
//! [`ConfReader::records`] yields one [`Record`] per non-blank line without
//! validating field counts or types; that is left to the caller (see
//! [`Region::from_record`]).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Img2SvgError, Span};

/// Field separator used when none is given
pub const DEFAULT_SEPARATOR: char = '\t';

/// Column layout of a region line, used in help and error output
pub const CONF_FORMAT: &str = "x y rx ry title href";

/// Number of fields in a region line
const REGION_FIELDS: usize = 6;

/// A region file on disk; every call to [`records`](Self::records) starts a
/// fresh pass over the file.
#[derive(Debug, Clone)]
pub struct ConfReader {
    path: PathBuf,
    separator: char,
}

impl ConfReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Use a different field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and iterate its records lazily
    pub fn records(&self) -> Result<Records, Img2SvgError> {
        let file = File::open(&self.path).map_err(|source| Img2SvgError::FileAccess {
            path: self.path.clone(),
            source,
        })?;

        Ok(Records {
            path: self.path.clone(),
            separator: self.separator,
            reader: BufReader::new(file),
            buf: Vec::new(),
            line: 0,
            offset: 0,
            done: false,
        })
    }
}

/// One non-blank line, split into fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source file
    pub line: usize,
    /// Byte range of the line's content (without the line terminator)
    pub span: Span,
    pub fields: Vec<String>,
}

/// Lazy iterator over the records of a region file
pub struct Records {
    path: PathBuf,
    separator: char,
    reader: BufReader<File>,
    buf: Vec<u8>,
    line: usize,
    offset: usize,
    done: bool,
}

impl Iterator for Records {
    type Item = Result<Record, Img2SvgError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            let read = match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(n) => n,
                Err(source) => {
                    self.done = true;
                    return Some(Err(Img2SvgError::FileAccess {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };

            let start = self.offset;
            self.offset += read;
            self.line += 1;

            let Ok(text) = std::str::from_utf8(&self.buf) else {
                self.done = true;
                return Some(Err(Img2SvgError::MalformedConfig {
                    path: self.path.clone(),
                    line: self.line,
                    span: start..start + self.buf.trim_ascii_end().len(),
                    message: "line is not valid UTF-8".to_string(),
                }));
            };

            let content = text.trim_end_matches(['\n', '\r']);
            let trimmed = content.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(Ok(Record {
                line: self.line,
                span: start..start + content.len(),
                fields: trimmed.split(self.separator).map(str::to_string).collect(),
            }));
        }
        None
    }
}

/// A validated region line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub x: i64,
    pub y: i64,
    pub rx: i64,
    pub ry: i64,
    pub title: String,
    pub href: String,
}

impl Region {
    /// Validate a raw record: exactly six fields, the first four integers.
    ///
    /// Degenerate corners (`rx <= x`, `ry <= y`) are accepted as-is.
    pub fn from_record(record: &Record, path: &Path) -> Result<Self, Img2SvgError> {
        let malformed = |message: String| Img2SvgError::MalformedConfig {
            path: path.to_path_buf(),
            line: record.line,
            span: record.span.clone(),
            message,
        };

        if record.fields.len() != REGION_FIELDS {
            return Err(malformed(format!(
                "expected {} fields ({}), found {}",
                REGION_FIELDS,
                CONF_FORMAT,
                record.fields.len()
            )));
        }

        let coord = |index: usize, name: &str| -> Result<i64, Img2SvgError> {
            let raw = &record.fields[index];
            raw.trim()
                .parse::<i64>()
                .map_err(|_| malformed(format!("'{}' is not an integer ({})", raw, name)))
        };

        Ok(Region {
            x: coord(0, "x")?,
            y: coord(1, "y")?,
            rx: coord(2, "rx")?,
            ry: coord(3, "ry")?,
            title: record.fields[4].clone(),
            href: record.fields[5].clone(),
        })
    }

    pub fn width(&self) -> i64 {
        self.rx - self.x
    }

    pub fn height(&self) -> i64 {
        self.ry - self.y
    }
}
