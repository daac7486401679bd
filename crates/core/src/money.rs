//! Money amounts.

use core::iter::Sum;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A monetary amount in a single implicit currency.
///
/// Arithmetic is carried out unrounded; rounding to two decimals happens only
/// when the amount is displayed.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> f64 {
        self.0
    }

    /// `percent` hundredths of this amount.
    pub fn percent_of(self, percent: u8) -> Price {
        Price(self.0 * f64::from(percent) / 100.0)
    }

    /// Amount rounded half away from zero to whole cents.
    pub fn to_display_amount(self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl ValueObject for Price {}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Self) -> Self::Output {
        Price(self.0 - rhs.0)
    }
}

impl Sum<Self> for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |a, b| a + b)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.to_display_amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Price::new(10.0).to_string(), "10.00");
        assert_eq!(Price::new(1.25).to_string(), "1.25");
        assert_eq!(Price::new(-3.5).to_string(), "-3.50");
    }

    #[test]
    fn display_rounds_ties_away_from_zero() {
        assert_eq!(Price::new(1.125).to_string(), "1.13");
        assert_eq!(Price::new(0.875).to_string(), "0.88");
    }

    #[test]
    fn arithmetic_is_not_rounded() {
        let total: Price = [1.25, 1.125, 1.0, 0.875, 5.0]
            .into_iter()
            .map(Price::new)
            .sum();
        assert_eq!(total, Price::new(9.25));
        assert_eq!(Price::new(1.25).percent_of(10), Price::new(0.125));
        assert_eq!(Price::new(1.25) - Price::new(0.125), Price::new(1.125));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: percent_of(0) is zero and percent_of(100) is the full amount.
        #[test]
        fn percent_bounds(amount in 0.0f64..1_000_000.0) {
            let price = Price::new(amount);
            prop_assert_eq!(price.percent_of(0), Price::ZERO);
            let full = price.percent_of(100).amount();
            prop_assert!((full - amount).abs() <= amount * 1e-12);
        }
    }
}
