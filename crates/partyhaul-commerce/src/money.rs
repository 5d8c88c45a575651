//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! prices everything in USD, so no currency dimension is carried.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in US dollars.
///
/// Amounts are stored in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use partyhaul_commerce::money::Money;
    /// let price = Money::from_dollars(4.48);
    /// assert_eq!(price.cents, 448);
    /// ```
    pub fn from_dollars(dollars: f64) -> Self {
        Self {
            cents: (dollars * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Get the amount as decimal dollars.
    pub fn to_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Checked addition.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::new)
    }

    /// Checked subtraction.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        self.cents.checked_sub(other.cents).map(Money::new)
    }

    /// Checked multiplication by a quantity.
    pub fn try_multiply(&self, quantity: i64) -> Option<Money> {
        self.cents.checked_mul(quantity).map(Money::new)
    }

    /// Checked sum of an iterator of amounts.
    pub fn try_sum<'a>(amounts: impl Iterator<Item = &'a Money>) -> Option<Money> {
        let mut total = Money::zero();
        for amount in amounts {
            total = total.try_add(amount)?;
        }
        Some(total)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents.abs();
        let sign = if self.cents < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}
