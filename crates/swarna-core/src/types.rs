//! # Domain Types
//!
//! Core domain types used throughout Swarna.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  InvoiceInput   │   │    TaxRates     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  net_weight (g) │   │  invoice_number │   │  cgst: GstRate  │       │
//! │  │  rate (₹/g)     │   │  discount       │   │  sgst: GstRate  │       │
//! │  │  making (₹/g)   │   │  items          │   │  (shop level)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    GstRate      │   │  PaymentStatus  │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  percent        │   │  Paid           │                              │
//! │  │  1.5 = 1.5%     │   │  Due            │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values of these types are already coerced. Loose external records are
//! turned into them by [`crate::record`], and nowhere else.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// GST Rate
// =============================================================================

/// A GST rate expressed as a percentage (`1.5` means 1.5%).
///
/// ## Why Percent, Not Basis Points?
/// Shop settings store the rate exactly as the owner typed it. Keeping the
/// percentage as a decimal reproduces `amount * rate / 100` digit for digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct GstRate(#[ts(type = "string")] Decimal);

impl GstRate {
    /// Creates a rate from a percentage.
    #[inline]
    pub const fn from_percent(percent: Decimal) -> Self {
        GstRate(percent)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        GstRate(Decimal::ZERO)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Computes the tax on `amount`: `amount * percent / 100`.
    ///
    /// No rounding happens here. Rounding is applied once, to the grand total.
    /// Returns `None` when the product leaves the `Decimal` range.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use swarna_core::money::Money;
    /// use swarna_core::types::GstRate;
    ///
    /// let cgst = GstRate::from_percent(Decimal::new(15, 1)); // 1.5%
    /// assert_eq!(cgst.apply(Money::from_rupees(19998)), Some(Money::from_paise(29997)));
    /// ```
    pub fn apply(&self, amount: Money) -> Option<Money> {
        amount
            .amount()
            .checked_mul(self.0)
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
            .map(Money::new)
    }
}

impl Default for GstRate {
    fn default() -> Self {
        GstRate::zero()
    }
}

// =============================================================================
// Tax Rates
// =============================================================================

/// Shop-level GST configuration: central and state halves.
///
/// Owned by the shop settings record; the calculator only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRates {
    pub cgst: GstRate,
    pub sgst: GstRate,
}

impl TaxRates {
    pub const fn new(cgst: GstRate, sgst: GstRate) -> Self {
        TaxRates { cgst, sgst }
    }

    /// Builds rates from two percentages.
    pub const fn from_percents(cgst: Decimal, sgst: Decimal) -> Self {
        TaxRates {
            cgst: GstRate::from_percent(cgst),
            sgst: GstRate::from_percent(sgst),
        }
    }

    /// Combined GST percentage (CGST + SGST).
    pub fn combined_percent(&self) -> Decimal {
        self.cgst.percent() + self.sgst.percent()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One jewellery line on an invoice.
///
/// ## Pricing Basis
/// ```text
/// line total = net_weight × rate  +  net_weight × making_charge
///              └─ metal value ─┘     └──── making amount ────┘
/// ```
/// `net_weight` excludes stone weight. The making charge is per gram, never
/// a flat fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Weight in grams used for pricing.
    #[ts(type = "string")]
    pub net_weight: Decimal,

    /// Metal price per gram.
    pub rate: Money,

    /// Making charge per gram.
    pub making_charge: Money,
}

impl LineItem {
    pub const fn new(net_weight: Decimal, rate: Money, making_charge: Money) -> Self {
        LineItem {
            net_weight,
            rate,
            making_charge,
        }
    }
}

// =============================================================================
// Invoice Input
// =============================================================================

/// Everything the calculator needs from one invoice record.
///
/// Produced by [`crate::record`] from the stored invoice and its item rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceInput {
    /// Human-facing invoice number ("INV-0042").
    pub invoice_number: String,

    /// Date the invoice was issued, when the record carries one.
    pub issued_on: Option<NaiveDate>,

    /// Customer name printed on the invoice.
    pub customer_name: Option<String>,

    /// Flat discount subtracted before tax.
    pub discount: Money,

    /// Amount already received against this invoice.
    pub amount_paid: Money,

    /// Line items in the order they appear on the invoice.
    pub items: Vec<LineItem>,
}

// =============================================================================
// Payment Status
// =============================================================================

/// The paid/due badge shown next to an invoice total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing remains to be collected.
    Paid,
    /// Some of the grand total is still outstanding.
    Due,
}

impl PaymentStatus {
    /// Status for an outstanding balance (`grand_total - amount_paid`).
    pub fn for_balance(balance_due: Money) -> Self {
        if balance_due.is_positive() {
            PaymentStatus::Due
        } else {
            PaymentStatus::Paid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Due => "due",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_gst_rate_apply() {
        let rate = GstRate::from_percent(dec!(1.5));
        assert_eq!(rate.apply(Money::from_rupees(52000)), Some(Money::from_rupees(780)));
        assert_eq!(rate.apply(Money::from_rupees(-500)), Some(Money::new(dec!(-7.5))));
    }

    #[test]
    fn test_gst_rate_apply_overflow_is_none() {
        let rate = GstRate::from_percent(dec!(100));
        assert_eq!(rate.apply(Money::new(Decimal::MAX)), None);
        assert_eq!(GstRate::zero().apply(Money::new(Decimal::MAX)), Some(Money::zero()));
    }

    #[test]
    fn test_gst_rate_default_is_zero() {
        assert!(GstRate::default().is_zero());
        assert_eq!(TaxRates::default().combined_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_combined_percent() {
        let rates = TaxRates::from_percents(dec!(1.5), dec!(1.5));
        assert_eq!(rates.combined_percent(), dec!(3.0));
    }

    #[test]
    fn test_payment_status_for_balance() {
        assert_eq!(PaymentStatus::for_balance(Money::from_rupees(10)), PaymentStatus::Due);
        assert_eq!(PaymentStatus::for_balance(Money::zero()), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::for_balance(Money::from_rupees(-5)), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::Due.as_str(), "due");
    }

    #[test]
    fn test_payment_status_serializes_snake_case() {
        let json = serde_json::to_string(&PaymentStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
    }
}
