// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! String-form serde support: `Rational` travels as `"n/d"` (or `"n"`).

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Rational;

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct RationalVisitor;

impl Visitor<'_> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a rational literal such as \"-3/4\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Rational, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(RationalVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn travels_as_canonical_string() {
        let r = Rational::from(-6);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"-6\"");
        let back: Rational = serde_json::from_str("\"4/6\"").unwrap();
        assert_eq!(back.to_string(), "2/3");
    }

    #[test]
    fn rejects_zero_denominator() {
        assert!(serde_json::from_str::<Rational>("\"1/0\"").is_err());
        assert!(serde_json::from_str::<Rational>("0.5").is_err());
    }
}
