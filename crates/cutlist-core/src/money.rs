//! # Money Module
//!
//! Provides the `Money` type for computed prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE FLOATS STOP                                                      │
//! │                                                                         │
//! │  Material cost and banding cost are computed in floating point:        │
//! │    8.2555... + 1.8 = 10.0555...                                        │
//! │                                                                         │
//! │  The unit price is rounded UP exactly once, to whole currency units:   │
//! │    ceil(10.0555...) = 11                                               │
//! │                                                                         │
//! │  From that point on every value (line totals, grand totals) is an      │
//! │  integer, so 2 × 11 is always 22 and totals never drift.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cutlist_core::money::Money;
//!
//! let unit = Money::from_units(11);
//! let line_total = unit.multiply_quantity(2);
//! assert_eq!(line_total.units(), 22);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price in whole currency units.
///
/// Serializes as a bare number, so snapshots stay plain structured data.
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Rounds a floating point amount toward positive infinity.
    ///
    /// This is the single point where fractional cost becomes money.
    /// A positive fractional remainder is never rounded down.
    ///
    /// ## Example
    /// ```rust
    /// use cutlist_core::money::Money;
    ///
    /// assert_eq!(Money::ceil_from(10.0555).units(), 11);
    /// assert_eq!(Money::ceil_from(10.0).units(), 10);
    /// assert_eq!(Money::ceil_from(0.0001).units(), 1);
    /// ```
    #[inline]
    pub fn ceil_from(amount: f64) -> Self {
        Money(amount.ceil() as i64)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity, saturating on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use cutlist_core::money::Money;
    ///
    /// let unit_price = Money::from_units(11);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 33);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Multiplies money by a quantity; `None` if the product overflows.
    ///
    /// ## Example
    /// ```rust
    /// use cutlist_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(11).checked_multiply_quantity(2), Some(Money::from_units(22)));
    /// assert_eq!(Money::from_units(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a piece quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
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
