//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Why not integer cents?                                                 │
//! │    The promo engine computes 25% of the subtotal:                       │
//! │    25% of $25.98 = $6.495 ← not a whole number of cents!               │
//! │    Rounding here would change the order total the customer sees.       │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic. $6.495 is represented exactly, and the    │
//! │    document store already carries prices as decimal numbers (12.99).   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tasty_core::money::Money;
//!
//! // Create from major/minor units (preferred for literals)
//! let price = Money::from_major_minor(12, 99); // $12.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // $25.98
//! let total = price + Money::from_major_minor(3, 99); // $16.98
//!
//! // NEVER construct money from an f64 - there is no such constructor.
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal amount.
///
/// ## Design Decisions
/// - **`Decimal` (signed)**: Allows negative values for discounts and the
///   unclamped-total edge case
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **`#[serde(transparent)]`**: Serializes as a plain number, matching the
///   document store's field shape (`"price": 12.99`)
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► CartLine.unit_price ──► CartLine.line_total
///                                                  │
/// Cart.subtotal ──► Quote { delivery_fee, discount, total } ──► Order
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use tasty_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        let cents = if major < 0 {
            major * 100 - minor
        } else {
            major * 100 + minor
        };
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tasty_core::money::Money;
    ///
    /// let unit_price = Money::from_major_minor(2, 99); // $2.99
    /// let line_total = unit_price.times(3);
    /// assert_eq!(line_total, Money::from_major_minor(8, 97));
    /// ```
    #[inline]
    pub fn times(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Returns the given percentage of this amount.
    ///
    /// ## Arguments
    /// * `pct` - Percentage as a decimal number (25 = 25%)
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tasty_core::money::Money;
    ///
    /// let subtotal = Money::from_major_minor(25, 98); // $25.98
    /// let discount = subtotal.percentage(Decimal::from(25));
    /// // 25% of $25.98 = $6.495, exact - no rounding
    /// assert_eq!(discount, Money::new(Decimal::new(6495, 3)));
    /// ```
    pub fn percentage(&self, pct: Decimal) -> Money {
        Money(self.0 * pct / Decimal::from(100))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, self.0.abs())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
