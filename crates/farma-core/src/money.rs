//! # Money Module
//!
//! Provides the `Money` type for handling RON prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 49.99 RON price stored as f64 is already an approximation, and      │
//! │  every comparison the query engine makes (promo check, price sort)     │
//! │  would inherit that fuzziness.                                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Bani                                             │
//! │    49.99 RON = 4999 bani, compared and sorted exactly                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use farma_core::money::Money;
//!
//! // Create from bani (preferred)
//! let price = Money::from_bani(2599); // 25.99 RON
//!
//! // Arithmetic operations
//! let total = price + Money::from_bani(500); // 30.99 RON
//!
//! // NEVER do this:
//! // let bad = Money::from_float(25.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in bani (the smallest RON unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows price differences to be expressed directly
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.old_price_bani ──┐                                             │
/// │                           ├──► promotion check ──► discount badge       │
/// │  Product.new_price_bani ──┘                                             │
/// │                           │                                             │
/// │                           └──► price sort keys ──► directory ordering   │
/// │                                                                         │
/// │  EVERY price in the system flows through this type                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from bani (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use farma_core::money::Money;
    ///
    /// let price = Money::from_bani(2599); // Represents 25.99 RON
    /// assert_eq!(price.bani(), 2599);
    /// ```
    #[inline]
    pub const fn from_bani(bani: i64) -> Self {
        Money(bani)
    }

    /// Creates a Money value from major and minor units (lei and bani).
    ///
    /// ## Example
    /// ```rust
    /// use farma_core::money::Money;
    ///
    /// let price = Money::from_major_minor(25, 99); // 25.99 RON
    /// assert_eq!(price.bani(), 2599);
    /// ```
    #[inline]
    pub const fn from_major_minor(lei: i64, bani: i64) -> Self {
        Money(lei * 100 + bani)
    }

    /// Returns the value in bani (smallest currency unit).
    #[inline]
    pub const fn bani(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (lei) portion.
    #[inline]
    pub const fn lei(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (bani) portion (always 0-99).
    #[inline]
    pub const fn bani_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Computes the discount percentage between an old and a new price.
    ///
    /// This is the single source of truth for the promotion badge:
    /// `round(100 * (old - new) / old)`, rounded half-up with integer math.
    ///
    /// Returns 0 when there is no active promotion, i.e. when the old price
    /// is not strictly greater than the new one (or is not positive).
    ///
    /// ## Example
    /// ```rust
    /// use farma_core::money::Money;
    ///
    /// // 100.00 RON → 75.00 RON = 25% off
    /// let pct = Money::discount_percent(Money::from_bani(10000), Money::from_bani(7500));
    /// assert_eq!(pct, 25);
    ///
    /// // 99.99 RON → 49.99 RON = round(50.005%) = 50% off
    /// let pct = Money::discount_percent(Money::from_bani(9999), Money::from_bani(4999));
    /// assert_eq!(pct, 50);
    /// ```
    pub fn discount_percent(old: Money, new: Money) -> u8 {
        if old.0 <= new.0 || old.0 <= 0 {
            return 0;
        }
        // Use i128 to keep the widened ratio math overflow-free.
        // round(100 * diff / old) = floor((100 * diff + old/2) / old)
        let diff = (old.0 - new.0) as i128;
        let old = old.0 as i128;
        let pct = (100 * diff + old / 2) / old;
        pct as u8
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02} RON", sign, self.lei().abs(), self.bani_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

// =============================================================================
// Unit Tests
// =============================================================================
