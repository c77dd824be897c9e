// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-file layout: eight `n0,d0,n1,d1,n2,d2,flag` lines per query.

use std::io::{self, BufReader};
use std::path::Path;

use ccd_rational::Rational;
use tracing::{debug, trace};

use crate::coordinate::Coordinate;
use crate::error::QueryError;
use crate::lines::{self, DataLines, PointBuffer, POINT_FIELDS};
use crate::query::Query;

/// Fields on a single-file line: one point plus the ground-truth flag.
const LINE_FIELDS: usize = POINT_FIELDS + 1;

/// Where the parser stands relative to query boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    /// The next data line opens a new query.
    AwaitingRecordStart,
    /// Inside a query whose first line set `ground_truth`.
    Accumulating { ground_truth: bool },
}

/// Reads a single-file query suite from `path`.
///
/// ```no_run
/// use ccd_io::{read_queries, Rational};
///
/// let queries = read_queries::<Rational>("vertex-face/data_0_0.csv")?;
/// println!("{} queries", queries.len());
/// # Ok::<(), ccd_io::QueryError>(())
/// ```
pub fn read_queries<T: Coordinate>(path: impl AsRef<Path>) -> Result<Vec<Query<T>>, QueryError> {
    let path = path.as_ref();
    let file = lines::open(path)?;
    read_queries_from_reader(file, path)
}

/// [`read_queries`] with exact coordinates.
pub fn read_rational_queries(path: impl AsRef<Path>) -> Result<Vec<Query<Rational>>, QueryError> {
    read_queries(path)
}

/// [`read_queries`] with coordinates rounded to `f64`.
pub fn read_float_queries(path: impl AsRef<Path>) -> Result<Vec<Query<f64>>, QueryError> {
    read_queries(path)
}

/// Reads a single-file query suite from any reader.
///
/// `source` names the input in errors and logs; it is not opened.
pub fn read_queries_from_reader<T: Coordinate>(
    reader: impl io::Read,
    source: impl AsRef<Path>,
) -> Result<Vec<Query<T>>, QueryError> {
    let mut cursor = DataLines::new(BufReader::new(reader), source.as_ref(), LINE_FIELDS);
    debug!(source = %cursor.path().display(), "reading ccd queries");

    let mut queries = Vec::new();
    let mut points = PointBuffer::new();
    let mut state = RecordState::AwaitingRecordStart;

    while cursor.advance()? {
        let point = cursor.point::<T>()?;
        let flag = ground_truth_flag(&cursor)?;

        let ground_truth = match state {
            RecordState::AwaitingRecordStart => flag,
            RecordState::Accumulating { ground_truth } => {
                if flag != ground_truth {
                    return Err(QueryError::GroundTruthMismatch {
                        path: cursor.path().to_path_buf(),
                        line: cursor.line(),
                        expected: ground_truth,
                        found: flag,
                    });
                }
                ground_truth
            }
        };

        state = match points.push(point) {
            Some(vertices) => {
                trace!(index = queries.len(), ground_truth, "query complete");
                queries.push(Query::new(vertices, ground_truth));
                RecordState::AwaitingRecordStart
            }
            None => RecordState::Accumulating { ground_truth },
        };
    }

    if state != RecordState::AwaitingRecordStart || queries.is_empty() {
        return Err(cursor.end_of_input_error());
    }

    debug!(
        source = %cursor.path().display(),
        queries = queries.len(),
        "read ccd queries"
    );
    Ok(queries)
}

/// Decodes the seventh field: an integer where zero means "no collision".
fn ground_truth_flag<R: io::BufRead>(cursor: &DataLines<R>) -> Result<bool, QueryError> {
    let field = cursor.field(POINT_FIELDS);
    field
        .parse::<i64>()
        .map(|value| value != 0)
        .map_err(|_| QueryError::Flag {
            path: cursor.path().to_path_buf(),
            line: cursor.line(),
            value: field.to_owned(),
        })
}
