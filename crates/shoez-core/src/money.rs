//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The storefront persists prices as JSON numbers:                        │
//! │    { "name": "Shoe A", "price": 19.99 }                                 │
//! │                                                                         │
//! │  Summed as floats:                                                      │
//! │    19.99 * 3 = 59.970000000000006  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "19.99" ──parse──► 1999 cents ──× 3──► 5997 cents                    │
//! │    The decimal text is read digit by digit, never through f64           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoez_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Or from the decimal text a shopper or JSON payload supplies
//! let parsed = Money::parse_decimal("10.99").unwrap();
//! assert_eq!(parsed, price);
//!
//! // Arithmetic operations
//! let doubled = price * 2_i64;                 // $21.98
//! let total = price + Money::from_cents(500);  // $15.99
//! assert_eq!(doubled.cents(), 2198);
//! assert_eq!(total.cents(), 1599);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: A gift coupon larger than the cart leaves a negative
///   total, and that value must be representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  persisted price ──► CartLineItem.unit_price ──► line_total             │
/// │                                                   │                     │
/// │                                                   ▼                     │
/// │                       CheckoutSession.running_total ──► voucher ──► due │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a plain decimal amount such as `"19.99"`, `"50"` or `"-3.5"`.
    ///
    /// Digits beyond the second decimal place round half up on the third.
    /// Exponents, thousands separators and currency symbols are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("19.99"), Some(Money::from_cents(1999)));
    /// assert_eq!(Money::parse_decimal("50"), Some(Money::from_cents(5000)));
    /// assert_eq!(Money::parse_decimal(".5"), Some(Money::from_cents(50)));
    /// assert_eq!(Money::parse_decimal("1.005"), Some(Money::from_cents(101)));
    /// assert_eq!(Money::parse_decimal("abc"), None);
    /// ```
    pub fn parse_decimal(input: &str) -> Option<Money> {
        let text = input.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().is_some_and(|d| d >= 5);

        let mut cents = whole.checked_mul(100)?.checked_add(tenths * 10 + hundredths)?;
        if round_up {
            cents = cents.checked_add(1)?;
        }

        Some(Money(if negative { -cents } else { cents }))
    }

    /// Converts a JSON number (as found in the persisted cart) to Money.
    ///
    /// Integers and ordinary decimals go through [`Money::parse_decimal`];
    /// only exponent notation falls back to rounding the `f64` value.
    pub fn from_json_number(number: &serde_json::Number) -> Option<Money> {
        if let Some(whole) = number.as_i64() {
            return whole.checked_mul(100).map(Money);
        }

        Money::parse_decimal(&number.to_string()).or_else(|| {
            let value = number.as_f64()?;
            let cents = (value * 100.0).round();
            if cents.is_finite() && cents.abs() < i64::MAX as f64 {
                Some(Money(cents as i64))
            } else {
                None
            }
        })
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity, pinning at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(5000); // Shoe A, $50.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 10000);    // $100.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies by a quantity, `None` if the result leaves the `i64` range.
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// let a = Money::from_cents(i64::MAX);
    /// assert_eq!(a.checked_add(Money::from_cents(1)), None);
    /// ```
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts `other`, `None` on overflow.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `bps` basis points of this amount (1000 bps = 10%).
    ///
    /// Rounds half away from zero to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// let total = Money::from_cents(1999);
    /// assert_eq!(total.percentage_of(1000).cents(), 200); // 199.9 → 200
    /// ```
    pub fn percentage_of(&self, bps: u32) -> Money {
        // i128 keeps large totals from overflowing during the multiply
        let product = i128::from(self.0) * i128::from(bps);
        let rounded = if product >= 0 {
            (product + 5000) / 10000
        } else {
            (product - 5000) / 10000
        };
        // bps above 10000 can push past i64
        let pinned = i64::try_from(rounded)
            .unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX });
        Money(pinned)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(10000); // $100.00
    /// let discounted = subtotal.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(discounted.cents(), 9000); // $90.00
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        Money(self.0.saturating_sub(self.percentage_of(discount_bps).0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// For debugging and logs. The storefront config owns the display currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

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
        Money(self.0 * i64::from(qty))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing line totals into a cart total. Pins at the `i64` bounds.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-7000)), "-$70.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("19.99"), Some(Money::from_cents(1999)));
        assert_eq!(Money::parse_decimal(" 50 "), Some(Money::from_cents(5000)));
        assert_eq!(Money::parse_decimal("0.1"), Some(Money::from_cents(10)));
        assert_eq!(Money::parse_decimal("-3.5"), Some(Money::from_cents(-350)));
        assert_eq!(Money::parse_decimal("2.994"), Some(Money::from_cents(299)));
        assert_eq!(Money::parse_decimal("2.995"), Some(Money::from_cents(300)));

        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("."), None);
        assert_eq!(Money::parse_decimal("$5"), None);
        assert_eq!(Money::parse_decimal("1e3"), None);
        assert_eq!(Money::parse_decimal("1.2.3"), None);
    }

    #[test]
    fn test_from_json_number() {
        let whole: serde_json::Number = 50.into();
        assert_eq!(Money::from_json_number(&whole), Some(Money::from_cents(5000)));

        let decimal = serde_json::Number::from_f64(19.99).unwrap();
        assert_eq!(Money::from_json_number(&decimal), Some(Money::from_cents(1999)));

        let tricky = serde_json::Number::from_f64(0.1 + 0.2).unwrap();
        assert_eq!(Money::from_json_number(&tricky), Some(Money::from_cents(30)));
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_cents(10000); // $100.00
        assert_eq!(subtotal.apply_percentage_discount(1000).cents(), 9000);
        assert_eq!(subtotal.apply_percentage_discount(2000).cents(), 8000);
    }

    #[test]
    fn test_percentage_rounding_is_symmetric() {
        assert_eq!(Money::from_cents(5).percentage_of(1000).cents(), 1);
        assert_eq!(Money::from_cents(-5).percentage_of(1000).cents(), -1);
        assert_eq!(Money::from_cents(4).percentage_of(1000).cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }

    #[test]
    fn test_multiply_quantity_pins_at_bounds() {
        let price = Money::from_cents(10_000_000);
        assert_eq!(price.multiply_quantity(9_000_000_000_000).cents(), i64::MAX);
        assert_eq!(price.checked_mul(9_000_000_000_000), None);
        assert_eq!(price.checked_mul(3), Some(Money::from_cents(30_000_000)));
    }

    #[test]
    fn test_checked_add_sub() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN + 1);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(min.checked_sub(Money::from_cents(10000)), None);
        assert_eq!(
            Money::from_cents(10000).checked_sub(Money::from_cents(3000)),
            Some(Money::from_cents(7000))
        );
        let total: Money = vec![max, Money::from_cents(5)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }
}
