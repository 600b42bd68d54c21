//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    3.333 × 6000 = 19997.999999999996  ❌ WRONG!                         │
//! │                                                                         │
//! │  Jewellery is priced per gram with milligram weights, so amounts are   │
//! │  not whole paise until the very end. Integer paise would round too     │
//! │  early and drift from the printed invoice.                             │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    3.333 × 6000 = 19998.000 exactly                                     │
//! │    Only the grand total is rounded, once, to whole rupees              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use swarna_core::money::Money;
//!
//! let rate = Money::from_rupees(6000);            // ₹6000 per gram
//! let weight = Decimal::new(3333, 3);             // 3.333 g
//! let value = rate * weight;
//! assert_eq!(value, Money::from_rupees(19998));
//! assert_eq!(value.to_string(), "₹19,998.00");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount held as an exact decimal.
///
/// ## Design Decisions
/// - **Signed**: a discount larger than the subtotal yields negative amounts,
///   which must survive so the caller can see them
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Serialised as a string**: `"19998.000"` keeps every digit intact in JSON
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.rate ──┬──► LineValuation.line_total ──► InvoiceTotals        │
/// │  LineItem.making ┘                                   │                  │
/// │                                                      ├──► Screen        │
/// │                                                      ├──► Print / PDF   │
/// │                                                      └──► Export row    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Wraps an exact decimal rupee amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use swarna_core::money::Money;
    ///
    /// let price = Money::from_rupees(5000);
    /// assert_eq!(price.to_string(), "₹5,000.00");
    /// ```
    #[inline]
    pub fn from_rupees(rupees: i64) -> Self {
        Money(Decimal::from(rupees))
    }

    /// Creates a Money value from paise (1/100 rupee).
    ///
    /// ## Example
    /// ```rust
    /// use swarna_core::money::Money;
    ///
    /// let amount = Money::from_paise(29997);
    /// assert_eq!(amount.to_string(), "₹299.97");
    /// ```
    #[inline]
    pub fn from_paise(paise: i64) -> Self {
        Money(Decimal::new(paise, 2))
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

    /// Rounds to the nearest whole rupee, halves away from zero.
    ///
    /// ## Half Away From Zero
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │   10.5 →  11      10.49 →  10                                       │
    /// │  -10.5 → -11     -10.49 → -10                                       │
    /// │                                                                     │
    /// │  NOT bankers rounding: 2.5 → 3, never 2.                            │
    /// │  Totals printed on past invoices were rounded this way and must    │
    /// │  reproduce exactly.                                                 │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use swarna_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1050).round_to_rupee(), Money::from_rupees(11));
    /// assert_eq!(Money::from_paise(-1050).round_to_rupee(), Money::from_rupees(-11));
    /// assert_eq!(Money::from_paise(250).round_to_rupee(), Money::from_rupees(3));
    /// ```
    pub fn round_to_rupee(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns the amount as whole rupees, rounding halves away from zero.
    ///
    /// Fails only when the amount does not fit in an `i64`.
    pub fn whole_rupees(&self) -> CoreResult<i64> {
        self.round_to_rupee()
            .0
            .to_i64()
            .ok_or_else(|| CoreError::AmountOutOfRange {
                amount: self.0.to_string(),
            })
    }

    /// Returns the amount as non-negative whole rupees.
    ///
    /// This is the precondition of [`crate::words::to_words`]: the caller
    /// decides what to print when a total has gone negative.
    pub fn whole_rupees_unsigned(&self) -> CoreResult<u64> {
        let rupees = self.whole_rupees()?;
        u64::try_from(rupees).map_err(|_| CoreError::NegativeAmount {
            amount: self.0.to_string(),
        })
    }

    /// Drops trailing zeros from the decimal scale (`52000.000` → `52000`).
    #[inline]
    pub fn normalize(&self) -> Money {
        Money(self.0.normalize())
    }

    // -------------------------------------------------------------------------
    // Checked Arithmetic
    // -------------------------------------------------------------------------
    //
    // The operator impls below panic past the `Decimal` range (about 7.9e28).
    // Anything that multiplies input weights and rates goes through these.

    /// Addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtraction, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiplication by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use swarna_core::money::Money;
    ///
    /// let rate = Money::from_rupees(1_000_000_000_000_000);
    /// assert_eq!(rate.checked_mul(Decimal::from(2)), Some(Money::from_rupees(2_000_000_000_000_000)));
    /// assert_eq!(rate.checked_mul(Decimal::from(1_000_000_000_000_000i64)), None);
    /// ```
    #[inline]
    pub fn checked_mul(self, qty: Decimal) -> Option<Money> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Addition clamped to the representable range.
    #[inline]
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtraction clamped to the representable range.
    #[inline]
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiplication clamped to the representable range.
    #[inline]
    pub fn saturating_mul(self, qty: Decimal) -> Money {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Indian Digit Grouping
// =============================================================================

/// Groups an unsigned digit string the Indian way: last three, then pairs.
///
/// `1234567` → `12,34,567`
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with the rupee sign, Indian grouping and two decimals.
///
/// Display rounds paise half away from zero; the stored value is untouched.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let text = format!("{:.2}", rounded.abs());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        write!(f, "{}₹{}.{}", sign, group_indian(whole), fraction)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
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

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by a quantity such as a weight in grams.
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: Decimal) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
