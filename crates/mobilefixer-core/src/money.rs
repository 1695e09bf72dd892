//! # Money Module
//!
//! Provides the `Money` type for bill amounts and part prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A customer with three repairs:                                         │
//! │    299.99 + 89.99 + 0.02 = 390.00000000000006  ❌ WRONG!                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paise / cents)                      │
//! │    29999 + 8999 + 2 = 39000  → "390.00"                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mobilefixer_core::money::Money;
//!
//! let screen = Money::from_minor(8999); // 89.99
//! let bill = screen + Money::from_minor(21000);
//! assert_eq!(bill.to_string(), "299.99");
//!
//! // Text from a form field
//! assert_eq!(Money::parse_decimal("299.99"), Some(bill));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed; non-negativity of bills
///   and prices is a validation rule, not a type rule
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: the symbol is a display concern (see the store config)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Number of minor units in one major unit.
    pub const MINOR_PER_MAJOR: i64 = 100;

    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use mobilefixer_core::money::Money;
    ///
    /// let price = Money::from_minor(12599); // 125.99
    /// assert_eq!(price.minor(), 12599);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * Self::MINOR_PER_MAJOR - minor)
        } else {
            Money(major * Self::MINOR_PER_MAJOR + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / Self::MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % Self::MINOR_PER_MAJOR).abs()
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

    /// Parses decimal text as typed into a price or bill field.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "299.99" → 29999      "10"   → 1000      ".5" → 50
    /// "  7.5 " → 750        "-3.25" → -325     "10." → 1000
    /// ```
    ///
    /// Anything else (letters, a third decimal place, a bare ".",
    /// overflow) returns `None`. Sign rules belong to the caller.
    pub fn parse_decimal(text: &str) -> Option<Money> {
        let text = text.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if frac.len() > 2
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };

        let minor = whole
            .checked_mul(Self::MINOR_PER_MAJOR)?
            .checked_add(frac)?;
        Some(Money(if negative { -minor } else { minor }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering ("299.99"); currency symbols are added by the
/// store configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a stock quantity (for stock valuation).
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0.saturating_mul(i64::from(qty)))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).minor(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(29999).to_string(), "299.99");
        assert_eq!(Money::from_minor(500).to_string(), "5.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_decimal_accepts_form_input() {
        assert_eq!(Money::parse_decimal("299.99"), Some(Money::from_minor(29999)));
        assert_eq!(Money::parse_decimal("10"), Some(Money::from_minor(1000)));
        assert_eq!(Money::parse_decimal(" 7.5 "), Some(Money::from_minor(750)));
        assert_eq!(Money::parse_decimal(".5"), Some(Money::from_minor(50)));
        assert_eq!(Money::parse_decimal("10."), Some(Money::from_minor(1000)));
        assert_eq!(Money::parse_decimal("-3.25"), Some(Money::from_minor(-325)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("."), None);
        assert_eq!(Money::parse_decimal("abc"), None);
        assert_eq!(Money::parse_decimal("1.999"), None);
        assert_eq!(Money::parse_decimal("1,000"), None);
        assert_eq!(Money::parse_decimal("+5"), None);
        assert_eq!(Money::parse_decimal("99999999999999999999"), None);
    }

    #[test]
    fn test_sum_of_bills() {
        let bills = [
            Money::from_minor(29999),
            Money::from_minor(8999),
            Money::from_minor(2),
        ];
        let total: Money = bills.iter().sum();
        assert_eq!(total.to_string(), "390.00");
    }

    #[test]
    fn test_stock_valuation() {
        assert_eq!((Money::from_minor(8999) * 15).minor(), 134985);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_minor(90_000_000_000_000_000);
        assert_eq!((huge + huge).minor(), i64::MAX);
        assert_eq!([huge, huge, huge].iter().sum::<Money>().minor(), i64::MAX);
        assert_eq!((Money::from_minor(i64::MIN) - huge).minor(), i64::MIN);
        assert_eq!((huge * u32::MAX).minor(), i64::MAX);

        let mut total = huge;
        total += huge;
        assert_eq!(total.minor(), i64::MAX);
    }
}
