// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{CheckedDiv, One, Signed, ToPrimitive, Zero};
use thiserror::Error;

use crate::parse::{parse_literal, parse_parts, ParseRationalError};

/// Errors raised when converting into or out of [`Rational`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RationalError {
    /// NaN and infinities have no rational value.
    #[error("cannot represent non-finite value {0} as a rational")]
    NonFinite(f64),
    /// A canonical numerator or denominator does not fit the requested type.
    #[error("{part} {value} does not fit in {target}")]
    Overflow {
        /// `"numerator"` or `"denominator"`.
        part: &'static str,
        /// Decimal rendering of the value that did not fit.
        value: String,
        /// Name of the bounded target type.
        target: &'static str,
    },
}

/// Arbitrary-precision rational number in canonical form.
///
/// # Invariant
/// The wrapped value is always reduced to lowest terms with a strictly
/// positive denominator. Every constructor and operator goes through
/// `num_rational`'s normalizing paths, so the invariant cannot be broken from
/// outside this crate.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational {
    value: BigRational,
}

impl Rational {
    pub(crate) fn from_big(value: BigRational) -> Self {
        Self { value }
    }

    pub(crate) fn big(&self) -> &BigRational {
        &self.value
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self::from_big(BigRational::zero())
    }

    /// Returns one.
    pub fn one() -> Self {
        Self::from_big(BigRational::one())
    }

    /// Builds `numerator / denominator` from two base-10 integer literals.
    ///
    /// The numerator may carry a leading `+` or `-`; the denominator may carry
    /// a leading `+` only and must not be zero.
    ///
    /// ```
    /// use ccd_rational::Rational;
    ///
    /// let r = Rational::from_fraction("2", "8")?;
    /// assert_eq!(r.to_string(), "1/4");
    /// # Ok::<(), ccd_rational::ParseRationalError>(())
    /// ```
    pub fn from_fraction(numerator: &str, denominator: &str) -> Result<Self, ParseRationalError> {
        let (numer, denom) = parse_parts(numerator, denominator)
            .map_err(|kind| ParseRationalError::new(format!("{numerator}/{denominator}"), kind))?;
        Ok(Self::from_big(BigRational::new(numer, denom)))
    }

    /// Builds the exact rational value of a finite `f64`.
    ///
    /// Every finite double is a dyadic rational, so the conversion never
    /// rounds.
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        BigRational::from_float(value)
            .map(Self::from_big)
            .ok_or(RationalError::NonFinite(value))
    }

    /// Nearest `f64` to this value. Lossy for most rationals.
    pub fn to_f64(&self) -> f64 {
        // `Ratio<BigInt>` converts every value, rounding or saturating to infinity.
        self.value.to_f64().unwrap_or(f64::NAN)
    }

    /// Canonical (reduced, signed) numerator.
    pub fn numer(&self) -> &BigInt {
        self.value.numer()
    }

    /// Canonical (reduced, strictly positive) denominator.
    pub fn denom(&self) -> &BigInt {
        self.value.denom()
    }

    /// Canonical numerator in base 10.
    pub fn numerator_string(&self) -> String {
        self.numer().to_string()
    }

    /// Canonical denominator in base 10.
    pub fn denominator_string(&self) -> String {
        self.denom().to_string()
    }

    /// Canonical numerator as an `i64`, if it fits.
    pub fn numerator_i64(&self) -> Result<i64, RationalError> {
        bounded(self.numer(), "numerator")
    }

    /// Canonical denominator as an `i64`, if it fits.
    pub fn denominator_i64(&self) -> Result<i64, RationalError> {
        bounded(self.denom(), "denominator")
    }

    /// `true` when the value is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// `true` when the canonical denominator is one.
    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }

    /// Sign of the value: `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.value.is_zero() {
            0
        } else if self.value.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::from_big(self.value.abs())
    }

    /// Division that returns `None` instead of panicking when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.value.checked_div(&rhs.value).map(Self::from_big)
    }
}

fn bounded(value: &BigInt, part: &'static str) -> Result<i64, RationalError> {
    value.to_i64().ok_or_else(|| RationalError::Overflow {
        part,
        value: value.to_string(),
        target: "i64",
    })
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numer, denom) = parse_literal(s)?;
        Ok(Self::from_big(BigRational::new(numer, denom)))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_integer() {
            write!(f, "{}", self.value.numer())
        } else {
            write!(f, "{}/{}", self.value.numer(), self.value.denom())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_big(BigRational::from_integer(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::from(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<f32> for Rational {
    type Error = RationalError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f64(f64::from(value))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ParseRationalErrorKind;

    #[test]
    fn fraction_is_reduced_with_positive_denominator() {
        let r = Rational::from_fraction("-6", "8").unwrap();
        assert_eq!(r.numerator_i64().unwrap(), -3);
        assert_eq!(r.denominator_i64().unwrap(), 4);

        let r = Rational::from_fraction("0", "17").unwrap();
        assert_eq!(r.numerator_string(), "0");
        assert_eq!(r.denominator_string(), "1");
    }

    #[test]
    fn zero_denominator_is_rejected() {
        for (n, d) in [("1", "0"), ("0", "0"), ("-5", "000")] {
            let err = Rational::from_fraction(n, d).unwrap_err();
            assert_eq!(err.kind(), ParseRationalErrorKind::ZeroDenominator);
        }
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        let err = Rational::from_fraction("a", "1").unwrap_err();
        assert_eq!(err.kind(), ParseRationalErrorKind::InvalidDigit);
        assert_eq!(err.input(), "a/1");
        assert!(Rational::from_fraction("1.5", "1").is_err());
        assert!(Rational::from_fraction("", "1").is_err());
    }

    #[test]
    fn huge_values_convert_without_nan() {
        let digits = "9".repeat(400);
        let big = Rational::from_fraction(&digits, "1").unwrap();
        assert_eq!(big.to_f64(), f64::INFINITY);
        assert_eq!((-big).to_f64(), f64::NEG_INFINITY);
        let tiny = Rational::from_fraction("1", &digits).unwrap();
        assert_eq!(tiny.to_f64(), 0.0);
        let ratio = Rational::from_fraction(&digits, &digits).unwrap();
        assert_eq!(ratio.to_f64(), 1.0);
    }

    #[test]
    fn equal_values_share_canonical_form() {
        let a: Rational = "1/4".parse().unwrap();
        let b: Rational = "2/8".parse().unwrap();
        let c = Rational::from_fraction("-3", "-12");
        assert_eq!(a, b);
        assert_eq!(a.numer(), b.numer());
        assert_eq!(a.denom(), b.denom());
        // Negative denominators are not valid literals.
        assert!(c.is_err());
    }

    #[test]
    fn float_conversion_is_exact() {
        assert_eq!(Rational::from_f64(0.25).unwrap().to_string(), "1/4");
        assert_eq!(Rational::from_f64(-2.0).unwrap().to_string(), "-2");
        assert_eq!(Rational::try_from(0.5_f32).unwrap().to_string(), "1/2");
        // 0.1 is not 1/10 in binary.
        let tenth = Rational::from_f64(0.1).unwrap();
        assert_ne!(tenth, "1/10".parse().unwrap());
        assert_eq!(tenth.to_f64(), 0.1);
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(matches!(
            Rational::from_f64(f64::NAN),
            Err(RationalError::NonFinite(_))
        ));
        assert!(Rational::from_f64(f64::INFINITY).is_err());
        assert!(Rational::try_from(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn bounded_accessors_report_overflow() {
        let huge: Rational = "123456789012345678901234567890/7".parse().unwrap();
        assert!(matches!(
            huge.numerator_i64(),
            Err(RationalError::Overflow {
                part: "numerator",
                ..
            })
        ));
        assert_eq!(huge.denominator_i64().unwrap(), 7);
        assert_eq!(huge.numerator_string(), "123456789012345678901234567890");
    }

    #[test]
    fn display_round_trips() {
        for text in ["0", "-1", "22/7", "-1/3", "98765432109876543210/3"] {
            let r: Rational = text.parse().unwrap();
            assert_eq!(r.to_string(), text);
            assert_eq!(r.to_string().parse::<Rational>().unwrap(), r);
        }
        assert_eq!(format!("{:?}", Rational::from(3)), "Rational(3)");
    }

    #[test]
    fn sign_helpers() {
        let neg: Rational = "-3/4".parse().unwrap();
        assert_eq!(neg.signum(), -1);
        assert_eq!(neg.abs().to_string(), "3/4");
        assert_eq!(Rational::zero().signum(), 0);
        assert!(Rational::zero().is_zero());
        assert!(Rational::from(5_u8).is_integer());
        assert!(!neg.is_integer());
    }

    #[test]
    fn checked_div_guards_zero() {
        let one = Rational::one();
        assert!(one.checked_div(&Rational::zero()).is_none());
        assert_eq!(
            one.checked_div(&Rational::from(4)).unwrap(),
            "1/4".parse().unwrap()
        );
    }

    #[test]
    fn ordering_is_exact() {
        let a: Rational = "1/3".parse().unwrap();
        let b = Rational::from_f64(1.0 / 3.0).unwrap();
        assert_ne!(a, b);
        assert!(b < a);
        assert!(Rational::from(-1) < Rational::zero());
    }
}
