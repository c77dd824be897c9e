// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Split layout: a vertex CSV (six fields per line, eight lines per query)
//! plus a JSON array holding one ground-truth flag per query.

use std::io::{self, BufReader};
use std::path::Path;

use ccd_rational::Rational;
use tracing::debug;

use crate::coordinate::Coordinate;
use crate::error::QueryError;
use crate::lines::{self, DataLines, PointBuffer, POINT_FIELDS};
use crate::query::{Point, Query, POINTS_PER_QUERY};

/// Reads a split query suite: points from `vertices`, flags from
/// `ground_truth`, zipped by query index.
pub fn read_split_queries<T: Coordinate>(
    vertices: impl AsRef<Path>,
    ground_truth: impl AsRef<Path>,
) -> Result<Vec<Query<T>>, QueryError> {
    let vertices = vertices.as_ref();
    let ground_truth = ground_truth.as_ref();
    let vertex_file = lines::open(vertices)?;
    let flag_file = lines::open(ground_truth)?;
    read_split_queries_from_readers(vertex_file, vertices, flag_file, ground_truth)
}

/// [`read_split_queries`] with exact coordinates.
pub fn read_rational_split_queries(
    vertices: impl AsRef<Path>,
    ground_truth: impl AsRef<Path>,
) -> Result<Vec<Query<Rational>>, QueryError> {
    read_split_queries(vertices, ground_truth)
}

/// [`read_split_queries`] with coordinates rounded to `f64`.
pub fn read_float_split_queries(
    vertices: impl AsRef<Path>,
    ground_truth: impl AsRef<Path>,
) -> Result<Vec<Query<f64>>, QueryError> {
    read_split_queries(vertices, ground_truth)
}

/// Reads a split query suite from two readers. The source names are used in
/// errors and logs only.
pub fn read_split_queries_from_readers<T: Coordinate>(
    vertices: impl io::Read,
    vertices_source: impl AsRef<Path>,
    ground_truth: impl io::Read,
    ground_truth_source: impl AsRef<Path>,
) -> Result<Vec<Query<T>>, QueryError> {
    let vertices_source = vertices_source.as_ref();
    let ground_truth_source = ground_truth_source.as_ref();

    let points = read_vertex_records::<T>(vertices, vertices_source)?;
    let flags = read_flags(ground_truth, ground_truth_source)?;

    if points.len() != flags.len() {
        return Err(QueryError::RecordCountMismatch {
            vertices: vertices_source.to_path_buf(),
            ground_truth: ground_truth_source.to_path_buf(),
            records: points.len(),
            flags: flags.len(),
        });
    }

    let queries: Vec<_> = points
        .into_iter()
        .zip(flags)
        .map(|(vertices, ground_truth)| Query::new(vertices, ground_truth))
        .collect();
    debug!(
        vertices = %vertices_source.display(),
        ground_truth = %ground_truth_source.display(),
        queries = queries.len(),
        "read split ccd queries"
    );
    Ok(queries)
}

fn read_vertex_records<T: Coordinate>(
    reader: impl io::Read,
    source: &Path,
) -> Result<Vec<[Point<T>; POINTS_PER_QUERY]>, QueryError> {
    let mut cursor = DataLines::new(BufReader::new(reader), source, POINT_FIELDS);
    let mut records = Vec::new();
    let mut points = PointBuffer::new();

    while cursor.advance()? {
        if let Some(record) = points.push(cursor.point::<T>()?) {
            records.push(record);
        }
    }

    if !points.is_empty() || records.is_empty() {
        return Err(cursor.end_of_input_error());
    }
    Ok(records)
}

fn read_flags(reader: impl io::Read, source: &Path) -> Result<Vec<bool>, QueryError> {
    serde_json::from_reader(BufReader::new(reader)).map_err(|err| {
        if err.is_io() {
            QueryError::Io {
                path: source.to_path_buf(),
                source: err.into(),
            }
        } else {
            QueryError::GroundTruthDocument {
                path: source.to_path_buf(),
                source: err,
            }
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn vertices(records: usize) -> String {
        "1,4,1,4,1,4\n".repeat(records * POINTS_PER_QUERY)
    }

    fn parse(vertex_text: &str, flags: &str) -> Result<Vec<Query<Rational>>, QueryError> {
        read_split_queries_from_readers(
            vertex_text.as_bytes(),
            "queries.csv",
            flags.as_bytes(),
            "truth.json",
        )
    }

    #[test]
    fn zips_flags_by_index() {
        let queries = parse(&vertices(3), "[true, false, true]").unwrap();
        let truth: Vec<bool> = queries.iter().map(Query::ground_truth).collect();
        assert_eq!(truth, [true, false, true]);
        let quarter: Rational = "1/4".parse().unwrap();
        assert!(queries
            .iter()
            .flat_map(|q| q.vertices().iter().flatten())
            .all(|c| *c == quarter));
    }

    #[test]
    fn count_mismatch_is_a_consistency_error() {
        let err = parse(&vertices(2), "[true, false, true]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Consistency);
        assert!(matches!(
            err,
            QueryError::RecordCountMismatch {
                records: 2,
                flags: 3,
                ..
            }
        ));
        assert!(parse(&vertices(2), "[true]").is_err());
    }

    #[test]
    fn malformed_document_is_a_format_error() {
        for doc in ["[1, 0]", "{\"a\": true}", "[true,", ""] {
            let err = parse(&vertices(1), doc).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{doc:?}");
        }
    }

    #[test]
    fn vertex_lines_need_six_fields() {
        let mut text = vertices(1);
        text.push_str(&"1,4,1,4,1\n".repeat(8));
        let err = parse(&text, "[true, true]").unwrap_err();
        assert!(matches!(err, QueryError::FieldCount { line: 9, expected: 6, found: 5, .. }));
    }

    #[test]
    fn partial_vertex_record_is_rejected() {
        let mut text = vertices(1);
        text.push_str("1,4,1,4,1,4\n");
        let err = parse(&text, "[true, true]").unwrap_err();
        assert!(matches!(err, QueryError::IncompleteRecord { lines: 9, .. }));
    }

    #[test]
    fn vertex_errors_come_before_flag_errors() {
        let text = "1,0,1,4,1,4\n".repeat(8);
        let err = parse(&text, "not json").unwrap_err();
        assert!(matches!(err, QueryError::Coordinate { line: 1, .. }));
    }

    #[test]
    fn blank_vertex_line_is_rejected() {
        for blank in ["", "   "] {
            let text = format!("{}{blank}\n{}", "1,4,1,4,1,4\n".repeat(3), "1,4,1,4,1,4\n".repeat(5));
            let err = parse(&text, "[true]").unwrap_err();
            assert!(
                matches!(err, QueryError::FieldCount { line: 4, expected: 6, found: 1, .. }),
                "{blank:?}: {err}"
            );
        }
    }
}
