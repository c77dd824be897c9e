// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The in-memory CCD query record.

use ccd_rational::Rational;

/// Number of points in every query: two primitives at two time steps.
pub const POINTS_PER_QUERY: usize = 8;

/// A 3D point.
pub type Point<T> = [T; 3];

/// One CCD test case.
///
/// Holds exactly [`POINTS_PER_QUERY`] points and the ground-truth answer
/// (`true` when the primitives collide). What each slot means (vertex-face or
/// edge-edge, which slots belong to which time step) is defined by the suite
/// that produced the data. The usual layout puts the four points at `t0`
/// first and the four points at `t1` last; see [`Query::start`] and
/// [`Query::end`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query<T> {
    vertices: [Point<T>; POINTS_PER_QUERY],
    ground_truth: bool,
}

/// A query with exact coordinates.
pub type RationalQuery = Query<Rational>;

/// A query with floating-point coordinates.
pub type FloatQuery = Query<f64>;

impl<T> Query<T> {
    /// Creates a query from its eight points and ground truth.
    pub const fn new(vertices: [Point<T>; POINTS_PER_QUERY], ground_truth: bool) -> Self {
        Self {
            vertices,
            ground_truth,
        }
    }

    /// All eight points in slot order.
    pub fn vertices(&self) -> &[Point<T>; POINTS_PER_QUERY] {
        &self.vertices
    }

    /// Point in `slot`, or `None` past the last slot.
    pub fn vertex(&self, slot: usize) -> Option<&Point<T>> {
        self.vertices.get(slot)
    }

    /// `true` when the primitives collide.
    pub const fn ground_truth(&self) -> bool {
        self.ground_truth
    }

    /// The first four points (conventionally the primitives at `t0`).
    pub fn start(&self) -> &[Point<T>] {
        &self.vertices[..POINTS_PER_QUERY / 2]
    }

    /// The last four points (conventionally the primitives at `t1`).
    pub fn end(&self) -> &[Point<T>] {
        &self.vertices[POINTS_PER_QUERY / 2..]
    }

    /// Consumes the query, returning its points and ground truth.
    pub fn into_parts(self) -> ([Point<T>; POINTS_PER_QUERY], bool) {
        (self.vertices, self.ground_truth)
    }

    /// Converts every coordinate with `f`, keeping slot order and ground
    /// truth.
    pub fn map_coordinates<U>(&self, mut f: impl FnMut(&T) -> U) -> Query<U> {
        let vertices = self
            .vertices
            .each_ref()
            .map(|point| point.each_ref().map(&mut f));
        Query::new(vertices, self.ground_truth)
    }
}

impl Query<Rational> {
    /// Floating-point copy of this query (each coordinate rounded to the
    /// nearest `f64`).
    pub fn to_f64(&self) -> Query<f64> {
        self.map_coordinates(Rational::to_f64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Query<i32> {
        let mut slot = 0;
        let vertices = [[0; 3]; POINTS_PER_QUERY].map(|_| {
            slot += 1;
            [slot, slot * 10, slot * 100]
        });
        Query::new(vertices, true)
    }

    #[test]
    fn start_and_end_split_the_slots() {
        let q = sample();
        assert_eq!(q.start().len(), 4);
        assert_eq!(q.end().len(), 4);
        assert_eq!(q.start()[0], [1, 10, 100]);
        assert_eq!(q.end()[0], [5, 50, 500]);
        assert_eq!(q.vertex(7), Some(&[8, 80, 800]));
        assert_eq!(q.vertex(8), None);
    }

    #[test]
    fn map_keeps_layout_and_ground_truth() {
        let q = sample().map_coordinates(|c| i64::from(*c) * 2);
        assert!(q.ground_truth());
        assert_eq!(q.vertices()[2], [6, 60, 600]);
    }

    #[test]
    fn rational_query_to_f64() {
        let quarter: Rational = "1/4".parse().unwrap();
        let q = Query::new(std::array::from_fn(|_| std::array::from_fn(|_| quarter.clone())), false);
        let f = q.to_f64();
        assert!(!f.ground_truth());
        assert!(f.vertices().iter().flatten().all(|c| *c == 0.25));
    }
}
