// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Coordinate types a query can be decoded into.

use ccd_rational::{ParseRationalError, Rational};

/// A scalar that can be decoded from a numerator/denominator pair of decimal
/// integer literals.
///
/// Both implementations validate through [`Rational::from_fraction`], so a
/// field that is rejected for one coordinate type is rejected for all of
/// them.
pub trait Coordinate: Sized {
    /// Decodes `numerator / denominator`.
    fn from_fraction(numerator: &str, denominator: &str) -> Result<Self, ParseRationalError>;
}

impl Coordinate for Rational {
    fn from_fraction(numerator: &str, denominator: &str) -> Result<Self, ParseRationalError> {
        Rational::from_fraction(numerator, denominator)
    }
}

/// Rounds the exact value to the nearest `f64`.
impl Coordinate for f64 {
    fn from_fraction(numerator: &str, denominator: &str) -> Result<Self, ParseRationalError> {
        Rational::from_fraction(numerator, denominator).map(|r| r.to_f64())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn float_coordinates_round_the_exact_value() {
        assert_eq!(<f64 as Coordinate>::from_fraction("1", "4").unwrap(), 0.25);
        assert_eq!(<f64 as Coordinate>::from_fraction("-1", "3").unwrap(), -1.0 / 3.0);
    }

    #[test]
    fn both_lanes_reject_zero_denominators() {
        assert!(<f64 as Coordinate>::from_fraction("1", "0").is_err());
        assert!(<Rational as Coordinate>::from_fraction("1", "0").is_err());
    }
}
