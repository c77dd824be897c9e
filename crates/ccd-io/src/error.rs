// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::fmt;
use std::io;
use std::path::PathBuf;

use ccd_rational::ParseRationalError;
use thiserror::Error;

/// Coarse classification of a [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source could not be opened or read to the end.
    Io,
    /// The layout is wrong: field counts, line counts, document shape.
    Format,
    /// A numeric field is not a valid literal, or a denominator is zero.
    Numeric,
    /// Values disagree: ground truth within a record, or record counts
    /// across the two files of a split pair.
    Consistency,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Io => "io",
            Self::Format => "format",
            Self::Numeric => "numeric",
            Self::Consistency => "consistency",
        })
    }
}

/// Failure while loading a query file.
///
/// Line numbers are 1-based physical lines of the named file, comment lines
/// included.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Open or read failure.
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid UTF-8.
    #[error("{} line {line}: invalid UTF-8", .path.display())]
    Encoding {
        /// File being read.
        path: PathBuf,
        /// Offending line.
        line: u64,
    },
    /// A data line has too few comma-separated fields.
    #[error("{} line {line}: expected {expected} fields, found {found}", .path.display())]
    FieldCount {
        /// File being read.
        path: PathBuf,
        /// Offending line.
        line: u64,
        /// Fields required per line.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },
    /// The file ended partway through a query.
    #[error(
        "{}: {lines} data lines is not a multiple of {}",
        .path.display(),
        crate::POINTS_PER_QUERY
    )]
    IncompleteRecord {
        /// File being read.
        path: PathBuf,
        /// Data lines consumed before end of file.
        lines: u64,
    },
    /// The file holds no data lines.
    #[error("{}: no queries found", .path.display())]
    Empty {
        /// File being read.
        path: PathBuf,
    },
    /// The ground-truth document is not a JSON array of booleans.
    #[error("{}: invalid ground-truth document: {source}", .path.display())]
    GroundTruthDocument {
        /// Ground-truth file.
        path: PathBuf,
        /// Decoder error.
        source: serde_json::Error,
    },
    /// A coordinate pair is not a valid rational.
    #[error("{} line {line}: {source}", .path.display())]
    Coordinate {
        /// File being read.
        path: PathBuf,
        /// Offending line.
        line: u64,
        /// Rejected literal.
        source: ParseRationalError,
    },
    /// The ground-truth field is not an integer.
    #[error("{} line {line}: invalid ground truth {value:?}", .path.display())]
    Flag {
        /// File being read.
        path: PathBuf,
        /// Offending line.
        line: u64,
        /// Rejected field.
        value: String,
    },
    /// A line disagrees with the ground truth set by the first line of its
    /// query.
    #[error(
        "{} line {line}: ground truth mismatch (query says {expected}, line says {found})",
        .path.display()
    )]
    GroundTruthMismatch {
        /// File being read.
        path: PathBuf,
        /// Offending line.
        line: u64,
        /// Ground truth of the query's first line.
        expected: bool,
        /// Ground truth of this line.
        found: bool,
    },
    /// A split pair holds different numbers of queries and flags.
    #[error(
        "{} holds {records} queries but {} holds {flags} ground-truth flags",
        .vertices.display(),
        .ground_truth.display()
    )]
    RecordCountMismatch {
        /// Vertex file.
        vertices: PathBuf,
        /// Ground-truth file.
        ground_truth: PathBuf,
        /// Queries decoded from the vertex file.
        records: usize,
        /// Flags decoded from the ground-truth file.
        flags: usize,
    },
}

impl QueryError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::Encoding { .. } => ErrorKind::Io,
            Self::FieldCount { .. }
            | Self::IncompleteRecord { .. }
            | Self::Empty { .. }
            | Self::GroundTruthDocument { .. } => ErrorKind::Format,
            Self::Coordinate { .. } | Self::Flag { .. } => ErrorKind::Numeric,
            Self::GroundTruthMismatch { .. } | Self::RecordCountMismatch { .. } => {
                ErrorKind::Consistency
            }
        }
    }

    /// Line the error points at, when it concerns a single line.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Encoding { line, .. }
            | Self::FieldCount { line, .. }
            | Self::Coordinate { line, .. }
            | Self::Flag { line, .. }
            | Self::GroundTruthMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }
}
