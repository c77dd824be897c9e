// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Continuous collision detection (CCD) query loaders.
//!
//! A CCD query is eight 3D points (two primitives at two time steps) plus a
//! ground-truth flag saying whether the primitives collide. This crate decodes
//! query suites from disk into [`Query`] values with exact ([`Rational`]) or
//! floating-point coordinates.
//!
//! Two on-disk layouts are supported:
//! - Single file ([`read_queries`]): CSV, eight lines per query, each line
//!   `n0,d0,n1,d1,n2,d2,flag` (three numerator/denominator pairs and the
//!   query's ground truth repeated on every line).
//! - Split pair ([`read_split_queries`]): a vertex CSV with six fields per line
//!   and a JSON array of booleans holding one flag per query.
//!
//! Lines starting with `#` are comments. Loading is all-or-nothing: the first
//! violation aborts the parse with a [`QueryError`] naming the file and line.
//! The crate never installs a logger; it emits `tracing` events that the
//! embedding application may collect.
#![forbid(unsafe_code)]

mod coordinate;
mod error;
mod lines;
mod query;
mod single;
mod split;

pub use ccd_rational::{ParseRationalError, Rational};
pub use coordinate::Coordinate;
pub use error::{ErrorKind, QueryError};
pub use query::{FloatQuery, Point, Query, RationalQuery, POINTS_PER_QUERY};
pub use single::{read_float_queries, read_queries, read_queries_from_reader, read_rational_queries};
pub use split::{
    read_float_split_queries, read_rational_split_queries, read_split_queries,
    read_split_queries_from_readers,
};
