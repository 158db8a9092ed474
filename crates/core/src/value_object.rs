//! Value objects: equality by value, not identity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; to "modify" one,
/// create a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative currency amount, stored in the smallest currency unit (cents).
///
/// Integer storage keeps revenue sums exact no matter how many orders are
/// accumulated. Rendered with exactly two decimals (`12.49`); serialized as a
/// JSON number.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build from a whole-unit part and a cents part (`cents` must be < 100).
    pub const fn new(whole: u64, cents: u64) -> Self {
        Self(whole * 100 + cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Fractional part in cents (`12.49` -> `49`).
    pub const fn fraction_cents(self) -> u64 {
        self.0 % 100
    }

    /// Extended line total: unit price times quantity.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as u64)
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl core::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !(value.is_finite() && value >= 0.0) {
            return Err(serde::de::Error::custom(format!(
                "money must be a finite non-negative amount, got {value}"
            )));
        }
        Ok(Money((value * 100.0).round() as u64))
    }
}
