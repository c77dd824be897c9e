// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Exact rational numbers for CCD query data.
//!
//! [`Rational`] is an arbitrary-precision rational value that is always kept in
//! canonical form: lowest terms, sign on the numerator, denominator strictly
//! positive. Two rationals that denote the same number therefore have identical
//! numerators and denominators, and equality/ordering are exact.
//!
//! # Construction
//!
//! - From decimal text: [`Rational::from_fraction`] (`("1", "4")`) or
//!   [`str::parse`] (`"1/4"`, `"-3"`). Malformed input and zero denominators are
//!   rejected with a [`ParseRationalError`].
//! - From primitives: `From` for every integer type, `TryFrom<f64>` /
//!   `TryFrom<f32>` for finite floats (exact binary expansion).
//!
//! # Comparison against primitives
//!
//! There are no mixed-type comparison operators. Promote the primitive
//! explicitly and compare like with like:
//!
//! ```
//! use ccd_rational::Rational;
//!
//! let quarter: Rational = "2/8".parse()?;
//! assert_eq!(quarter, Rational::try_from(0.25)?);
//! assert!(quarter < Rational::from(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Text form
//!
//! `Display` renders `"n"` for integers and `"n/d"` otherwise; `FromStr` reads
//! that form back without loss.
#![forbid(unsafe_code)]

mod ops;
mod parse;
mod rational;
#[cfg(feature = "serde")]
mod serde_impl;

pub use parse::{ParseRationalError, ParseRationalErrorKind};
pub use rational::{Rational, RationalError};
