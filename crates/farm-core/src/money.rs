//! # Money Module
//!
//! Prices, subtotals and savings as whole cents.
//!
//! ## Cents, Not Floats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices are whole cents: an egg is 50, a bale of wool 3000.    │
//! │                                                                         │
//! │  A discount is the only place a fraction of a cent appears:            │
//! │    two milks (120c) at 50% off  →  60c exactly                          │
//! │    one egg (50c) at 15% off     →  42.5c  →  43c                        │
//! │                                                                         │
//! │  Every such figure goes through `round_half_away`, so receipts,        │
//! │  totals and history agree on the same cent.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Limits
//! Discounts are not range-checked, so a percentage can push an amount past
//! what an `i64` holds. Arithmetic here saturates at `i64::MIN` / `i64::MAX`
//! instead of wrapping or panicking.
//!
//! ## Usage
//! ```rust
//! use farm_core::money::Money;
//!
//! let two_milks = Money::from_cents(120);
//! assert_eq!(two_milks.apply_percentage_discount(50).cents(), 60);
//! assert_eq!(two_milks.to_string(), "$1.20");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents.
///
/// Signed, since discounts above 100% legitimately produce negative
/// subtotals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Wraps a cent amount.
    ///
    /// ## Example
    /// ```rust
    /// use farm_core::money::Money;
    ///
    /// let jam = Money::from_cents(300);
    /// assert_eq!(jam.dollars(), 3);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Cents past the whole dollar, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// `percent`% of this amount, rounded to the nearest cent.
    ///
    /// Half a cent rounds away from zero (`0.5 → 1`, `-0.5 → -1`). The
    /// percentage is not range-checked: 150% or -20% are computed as-is.
    ///
    /// ## Example
    /// ```rust
    /// use farm_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(120).percent_of(50).cents(), 60);
    /// assert_eq!(Money::from_cents(50).percent_of(15).cents(), 8); // 7.5 → 8
    /// ```
    pub fn percent_of(&self, percent: i64) -> Money {
        Money::scaled(self.0, percent as i128)
    }

    /// What is left to pay after taking `discount_percent`% off.
    ///
    /// ## Example
    /// ```rust
    /// use farm_core::money::Money;
    ///
    /// let three_eggs = Money::from_cents(150);
    /// assert_eq!(three_eggs.apply_percentage_discount(20).cents(), 120);
    /// ```
    pub fn apply_percentage_discount(&self, discount_percent: i64) -> Money {
        Money::scaled(self.0, 100 - discount_percent as i128)
    }

    fn scaled(cents: i64, percent: i128) -> Money {
        Money::from_cents(round_half_away((cents as i128).saturating_mul(percent), 100))
    }
}

/// Integer division rounding half away from zero, saturating to the `i64`
/// range. `denominator` must be > 0.
pub(crate) fn round_half_away(numerator: i128, denominator: i128) -> i64 {
    let denominator = denominator.unsigned_abs();
    let magnitude = numerator.unsigned_abs().saturating_add(denominator / 2) / denominator;
    let magnitude = i128::try_from(magnitude).unwrap_or(i128::MAX);
    let rounded = if numerator < 0 { -magnitude } else { magnitude };

    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$1.50`, the format used on every receipt line.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
