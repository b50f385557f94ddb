//! Two-decimal monetary amounts.
//!
//! Costs are held as whole cents so that sums of already-rounded values stay
//! exact. On the wire a [`Money`] is a plain JSON number (`57.5`), matching the
//! shape persisted by the hosted estimates table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A currency-agnostic amount with exactly two fraction digits.
///
/// Addition saturates at [`Money::MAX`] rather than overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };
    pub const MAX: Money = Money { cents: i64::MAX };

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Round a raw amount to cents, half-up on the value scaled by 100.
    ///
    /// Non-finite input maps to zero. Amounts beyond the `i64` cent range
    /// clamp to [`Money::MAX`].
    pub fn from_amount(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self {
            cents: (value * 100.0 + 0.5).floor() as i64,
        }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// The amount as a float, e.g. `57.5` for 5750 cents.
    pub fn amount(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.cents = self.cents.saturating_add(rhs.cents);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Money::from_amount(value))
    }
}
