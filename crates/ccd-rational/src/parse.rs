// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decimal text decoding for [`Rational`](crate::Rational).

use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use thiserror::Error;

/// Why a piece of text was not accepted as a rational literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseRationalErrorKind {
    /// The numerator or denominator was empty.
    #[error("empty component")]
    Empty,
    /// A character other than an ASCII digit (after an optional sign).
    #[error("invalid digit")]
    InvalidDigit,
    /// The denominator was zero.
    #[error("zero denominator")]
    ZeroDenominator,
    /// The denominator carried a minus sign.
    #[error("negative denominator")]
    NegativeDenominator,
}

/// Error returned when text is not a valid base-10 rational literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rational {input:?}: {kind}")]
pub struct ParseRationalError {
    input: String,
    kind: ParseRationalErrorKind,
}

impl ParseRationalError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseRationalErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// The rejected input, as it was given.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The reason the input was rejected.
    pub fn kind(&self) -> ParseRationalErrorKind {
        self.kind
    }
}

/// Parses a signed base-10 integer: optional `+`/`-`, then one or more ASCII
/// digits. Anything else (whitespace, `_` separators, radix prefixes) is an
/// error.
fn parse_integer(text: &str) -> Result<BigInt, ParseRationalErrorKind> {
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &text[1..]),
        Some(b'+') => (Sign::Plus, &text[1..]),
        _ => (Sign::Plus, text),
    };
    if digits.is_empty() {
        return Err(ParseRationalErrorKind::Empty);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseRationalErrorKind::InvalidDigit);
    }
    let magnitude =
        BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseRationalErrorKind::InvalidDigit)?;
    Ok(if sign == Sign::Minus {
        -magnitude
    } else {
        magnitude
    })
}

/// Decodes a numerator/denominator pair into raw (not yet reduced) parts.
pub(crate) fn parse_parts(
    numerator: &str,
    denominator: &str,
) -> Result<(BigInt, BigInt), ParseRationalErrorKind> {
    let numer = parse_integer(numerator)?;
    if denominator.starts_with('-') {
        return Err(ParseRationalErrorKind::NegativeDenominator);
    }
    let denom = parse_integer(denominator)?;
    if denom.is_zero() {
        return Err(ParseRationalErrorKind::ZeroDenominator);
    }
    Ok((numer, denom))
}

/// Decodes `"int"` or `"int/uint"`.
pub(crate) fn parse_literal(text: &str) -> Result<(BigInt, BigInt), ParseRationalError> {
    let parts = match text.split_once('/') {
        Some((numer, denom)) => parse_parts(numer, denom),
        None => parse_parts(text, "1"),
    };
    parts.map_err(|kind| ParseRationalError::new(text, kind))
}
