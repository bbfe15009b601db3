//! Whole-unit price amounts in Uzbek so'm.
//!
//! Catalog prices have no minor unit, so a [`Price`] is a plain integer
//! amount. Arithmetic is exact and display uses space-grouped thousands.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Currency suffix appended when a price is displayed.
pub const CURRENCY_SUFFIX: &str = "so'm";

/// A price in whole so'm.
///
/// Serialized as a bare integer so persisted carts read `"price": 350000`.
///
/// ```
/// use navoi_curtain_core::Price;
///
/// assert_eq!(Price::new(350_000).to_string(), "350 000 so'm");
/// assert_eq!((Price::new(150_000) * 2).amount(), 300_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-so'm amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The raw amount in so'm.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Amount with thousands grouped by spaces and no currency suffix.
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {CURRENCY_SUFFIX}", self.grouped())
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(Price::new(0).grouped(), "0");
        assert_eq!(Price::new(999).grouped(), "999");
        assert_eq!(Price::new(1_000).grouped(), "1 000");
        assert_eq!(Price::new(50_000).grouped(), "50 000");
        assert_eq!(Price::new(1_250_000).grouped(), "1 250 000");
        assert_eq!(Price::new(-42_000).grouped(), "-42 000");
    }

    #[test]
    fn test_display_has_currency_suffix() {
        assert_eq!(Price::new(680_000).to_string(), "680 000 so'm");
    }

    #[test]
    fn test_sum_of_line_prices() {
        let total: Price = [Price::new(350_000) * 2, Price::new(150_000) * 1]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(850_000));
    }
}
