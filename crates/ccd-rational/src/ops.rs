// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Arithmetic operators for [`Rational`].
//!
//! Every operator yields a fresh canonical value. Division by zero panics,
//! as it does for the integer types; use [`Rational::checked_div`] when the
//! divisor is not known to be non-zero.

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Rational;

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational::from_big(self.big().$method(rhs.big()))
            }
        }

        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                (&self).$method(rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$method(&rhs)
            }
        }

        impl $assign_trait<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Rational) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $assign_trait<Rational> for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::from_big(-self.big())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn r(text: &str) -> Rational {
        text.parse().unwrap()
    }

    #[test]
    fn operators_produce_canonical_values() {
        assert_eq!((r("1/6") + r("1/3")).to_string(), "1/2");
        assert_eq!((r("1/2") - r("3/4")).to_string(), "-1/4");
        assert_eq!((r("2/3") * r("3/4")).to_string(), "1/2");
        assert_eq!((r("1/2") / r("-1/4")).to_string(), "-2");
        assert_eq!((-r("5/7")).to_string(), "-5/7");
    }

    #[test]
    fn operands_are_left_untouched() {
        let a = r("1/3");
        let b = r("2/3");
        let sum = &a + &b;
        assert_eq!(sum, Rational::one());
        assert_eq!(a, r("1/3"));
        assert_eq!(b, r("2/3"));
    }

    #[test]
    fn compound_assignment() {
        let mut acc = Rational::zero();
        acc += r("1/2");
        acc -= &r("1/8");
        acc *= r("8");
        acc /= &r("3");
        assert_eq!(acc, Rational::one());
    }

    #[test]
    fn sum_and_product() {
        let parts = [r("1/2"), r("1/4"), r("1/4")];
        assert_eq!(parts.iter().sum::<Rational>(), Rational::one());
        assert_eq!(parts.into_iter().product::<Rational>(), r("1/32"));
    }

    #[test]
    #[should_panic]
    fn division_by_zero_panics() {
        let _ = r("1") / Rational::zero();
    }
}
