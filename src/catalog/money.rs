//! Fixed-point prices stored as integer cents.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A non-negative price in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Convert a decimal amount to cents, rounding half away from zero
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        if amount < Decimal::ZERO {
            return None;
        }
        amount
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .map(Self)
    }

    /// Price multiplied by a quantity, `None` on overflow
    pub fn times(&self, quantity: u32) -> Option<Price> {
        self.0.checked_mul(u64::from(quantity)).map(Price)
    }

    pub fn checked_add(&self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    pub fn saturating_sub(&self, other: Price) -> Price {
        Price(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::str::FromStr for Price {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: Decimal = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid price: {}", s))?;
        Price::from_decimal(amount).ok_or_else(|| format!("Price out of range: {}", s))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative decimal number or decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        v.checked_mul(100)
            .map(Price)
            .ok_or_else(|| E::custom(format!("price too large: {}", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        if v < 0 {
            return Err(E::custom(format!("price must be non-negative: {}", v)));
        }
        self.visit_u64(v as u64)
    }

    // Shortest round-trip form, so 0.285 is read as written
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::from_cents(5550).to_string(), "55.50");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_rounds_half_away_from_zero() {
        assert_eq!(price("15.5"), Price::from_cents(1550));
        assert_eq!(price("19.999"), Price::from_cents(2000));
        assert_eq!(price("1.005"), Price::from_cents(101));
        assert_eq!(price("0.285"), Price::from_cents(29));
        assert_eq!(price("0.284"), Price::from_cents(28));
        assert!("-1".parse::<Price>().is_err());
        assert!("NaN".parse::<Price>().is_err());
    }

    #[test]
    fn test_deserialize_number_and_string() {
        let from_float: Price = serde_json::from_str("20.0").unwrap();
        let from_int: Price = serde_json::from_str("20").unwrap();
        let from_str: Price = serde_json::from_str("\"20.00\"").unwrap();
        assert_eq!(from_float, Price::from_cents(2000));
        assert_eq!(from_int, from_float);
        assert_eq!(from_str, from_float);

        let half_cent: Price = serde_json::from_str("\"0.285\"").unwrap();
        assert_eq!(half_cent, Price::from_cents(29));
        let half_cent_number: Price = serde_json::from_str("0.285").unwrap();
        assert_eq!(half_cent_number, Price::from_cents(29));

        assert!(serde_json::from_str::<Price>("-3").is_err());
        assert!(serde_json::from_str::<Price>("-0.5").is_err());
        assert!(serde_json::from_str::<Price>("\"abc\"").is_err());
    }

    #[test]
    fn test_serializes_as_fixed_point_string() {
        assert_eq!(serde_json::to_string(&Price::from_cents(5550)).unwrap(), "\"55.50\"");
        let back: Price = serde_json::from_str("\"55.50\"").unwrap();
        assert_eq!(back, Price::from_cents(5550));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Price::from_cents(2000).times(2), Some(Price::from_cents(4000)));
        assert_eq!(Price::from_cents(u64::MAX).times(2), None);
        assert_eq!(
            Price::from_cents(4000).checked_add(Price::from_cents(1550)),
            Some(Price::from_cents(5550))
        );
        assert_eq!(Price::from_cents(u64::MAX).checked_add(Price::from_cents(1)), None);
        assert_eq!(Price::from_cents(5).saturating_sub(Price::from_cents(9)), Price::ZERO);
    }
}
