// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Data-line cursor shared by both file layouts.

use std::fs::File;
use std::io::{self, BufRead};
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::coordinate::Coordinate;
use crate::error::QueryError;
use crate::query::{Point, POINTS_PER_QUERY};

/// Fields holding one point: three numerator/denominator pairs.
pub(crate) const POINT_FIELDS: usize = 6;

/// Opens `path` for reading, attributing failures to it.
pub(crate) fn open(path: &Path) -> Result<File, QueryError> {
    File::open(path).map_err(|source| QueryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Cursor over the data lines of a comma-separated query file.
///
/// Lines starting with `#` are skipped but still counted, so reported line
/// numbers match the file. Every other line is data and must carry at least
/// `min_fields` fields. Fields are split once per line and handed out trimmed.
pub(crate) struct DataLines<R> {
    reader: R,
    text: String,
    fields: Vec<Range<usize>>,
    path: PathBuf,
    min_fields: usize,
    line: u64,
    consumed: u64,
}

impl<R: BufRead> DataLines<R> {
    pub(crate) fn new(reader: R, path: &Path, min_fields: usize) -> Self {
        Self {
            reader,
            text: String::new(),
            fields: Vec::new(),
            path: path.to_path_buf(),
            min_fields,
            line: 0,
            consumed: 0,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Physical line of the current data line.
    pub(crate) const fn line(&self) -> u64 {
        self.line
    }

    /// Data lines handed out so far.
    pub(crate) const fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Advances to the next data line. Returns `Ok(false)` at end of input.
    pub(crate) fn advance(&mut self) -> Result<bool, QueryError> {
        loop {
            self.text.clear();
            self.fields.clear();
            let read = self
                .reader
                .read_line(&mut self.text)
                .map_err(|err| self.read_failure(err))?;
            if read == 0 {
                return Ok(false);
            }
            self.line += 1;
            let content = self.text.trim_end_matches(['\n', '\r']);
            if content.starts_with('#') {
                continue;
            }
            self.consumed += 1;
            let mut start = 0;
            for raw in content.split(',') {
                let lead = raw.len() - raw.trim_start().len();
                let trimmed = raw.trim();
                self.fields.push(start + lead..start + lead + trimmed.len());
                start += raw.len() + 1;
            }
            let found = self.fields.len();
            if found < self.min_fields {
                return Err(QueryError::FieldCount {
                    path: self.path.clone(),
                    line: self.line,
                    expected: self.min_fields,
                    found,
                });
            }
            return Ok(true);
        }
    }

    /// Field `index` of the current line, trimmed.
    pub(crate) fn field(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map_or("", |range| &self.text[range.clone()])
    }

    /// Decodes the point held in the first six fields of the current line.
    pub(crate) fn point<T: Coordinate>(&self) -> Result<Point<T>, QueryError> {
        Ok([self.coordinate(0)?, self.coordinate(1)?, self.coordinate(2)?])
    }

    fn coordinate<T: Coordinate>(&self, axis: usize) -> Result<T, QueryError> {
        T::from_fraction(self.field(2 * axis), self.field(2 * axis + 1)).map_err(|source| {
            QueryError::Coordinate {
                path: self.path.clone(),
                line: self.line,
                source,
            }
        })
    }

    /// Error for a file that ended mid-query or never started one.
    pub(crate) fn end_of_input_error(&self) -> QueryError {
        if self.consumed() == 0 {
            QueryError::Empty {
                path: self.path.clone(),
            }
        } else {
            QueryError::IncompleteRecord {
                path: self.path.clone(),
                lines: self.consumed,
            }
        }
    }

    fn read_failure(&self, err: io::Error) -> QueryError {
        if err.kind() == io::ErrorKind::InvalidData {
            return QueryError::Encoding {
                path: self.path.clone(),
                line: self.line + 1,
            };
        }
        QueryError::Io {
            path: self.path.clone(),
            source: err,
        }
    }
}

/// Collects decoded points into queries of [`POINTS_PER_QUERY`] points.
pub(crate) struct PointBuffer<T> {
    points: Vec<Point<T>>,
}

impl<T> PointBuffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            points: Vec::with_capacity(POINTS_PER_QUERY),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends `point`; returns the completed set of points once the buffer
    /// holds a full query.
    pub(crate) fn push(&mut self, point: Point<T>) -> Option<[Point<T>; POINTS_PER_QUERY]> {
        self.points.push(point);
        if self.points.len() < POINTS_PER_QUERY {
            return None;
        }
        let full = std::mem::replace(&mut self.points, Vec::with_capacity(POINTS_PER_QUERY));
        full.try_into().ok()
    }
}
