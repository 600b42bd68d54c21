//! # Invoice Ledger
//!
//! Turns line items, a discount and the shop's GST rates into the totals
//! block printed at the foot of every invoice.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. subtotal         = Σ line_total          (input order, one running  │
//! │                                               accumulator)              │
//! │  2. taxable_amount   = subtotal − discount                              │
//! │  3. cgst_amount      = taxable_amount × cgst / 100                      │
//! │  4. sgst_amount      = taxable_amount × sgst / 100                      │
//! │  5. before_rounding  = taxable_amount + cgst_amount + sgst_amount       │
//! │  6. grand_total      = round half away from zero (whole rupees)         │
//! │  7. round_off        = grand_total − before_rounding                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is fixed so that totals match invoices already printed and
//! shared with customers. Nothing is cached: callers recompute on every
//! render, print and export.
//!
//! ## Discount Larger Than Subtotal
//! The numbers flow through unchanged (negative taxable amount, negative
//! taxes, negative grand total) and [`InvoiceTotals::warning`] is set. Whether
//! to refuse such an invoice is decided one layer up, by
//! [`crate::validation::validate_totals_for_save`].
//!
//! ## Amounts Beyond the Decimal Range
//! Every step uses checked arithmetic. If any step overflows, the amounts are
//! reported as zero, the discount is kept as given, and the warning is
//! [`TotalsWarning::Overflow`]. The calculation still never panics or errors.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{GstRate, InvoiceInput, LineItem, TaxRates};
use crate::valuation::checked_valuate;

// =============================================================================
// Totals
// =============================================================================

/// Anomalies the calculator computed through instead of failing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TotalsWarning {
    /// The discount exceeded the subtotal by `excess`.
    NegativeTaxableAmount { excess: Money },
    /// An intermediate amount left the representable range; the amounts
    /// are zeroed and must not be shown or saved.
    Overflow,
}

/// The financial summary of one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub taxable_amount: Money,
    pub cgst_amount: Money,
    pub sgst_amount: Money,
    pub total_before_rounding: Money,
    /// Signed adjustment printed as "Round Off", within ±0.50.
    pub round_off: Money,
    /// Always a whole number of rupees.
    pub grand_total: Money,
    pub warning: Option<TotalsWarning>,
}

impl InvoiceTotals {
    /// Combined CGST + SGST.
    pub fn total_tax(&self) -> Money {
        self.cgst_amount.saturating_add(self.sgst_amount)
    }

    /// True when the amounts could not be computed.
    pub fn has_overflowed(&self) -> bool {
        self.warning == Some(TotalsWarning::Overflow)
    }

    fn overflowed(discount: Money) -> Self {
        InvoiceTotals {
            subtotal: Money::zero(),
            discount,
            taxable_amount: Money::zero(),
            cgst_amount: Money::zero(),
            sgst_amount: Money::zero(),
            total_before_rounding: Money::zero(),
            round_off: Money::zero(),
            grand_total: Money::zero(),
            warning: Some(TotalsWarning::Overflow),
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes invoice totals.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use swarna_core::ledger::compute_totals;
/// use swarna_core::money::Money;
/// use swarna_core::types::{GstRate, LineItem};
///
/// let items = [LineItem::new(Decimal::from(10), Money::from_rupees(5000), Money::from_rupees(200))];
/// let gst = GstRate::from_percent(Decimal::new(15, 1));
///
/// let totals = compute_totals(&items, Money::zero(), gst, gst);
/// assert_eq!(totals.subtotal, Money::from_rupees(52000));
/// assert_eq!(totals.cgst_amount, Money::from_rupees(780));
/// assert_eq!(totals.grand_total, Money::from_rupees(53560));
/// assert!(totals.round_off.is_zero());
/// ```
pub fn compute_totals(
    items: &[LineItem],
    discount: Money,
    cgst: GstRate,
    sgst: GstRate,
) -> InvoiceTotals {
    checked_totals(items, discount, cgst, sgst)
        .unwrap_or_else(|| InvoiceTotals::overflowed(discount))
}

fn checked_totals(
    items: &[LineItem],
    discount: Money,
    cgst: GstRate,
    sgst: GstRate,
) -> Option<InvoiceTotals> {
    let mut subtotal = Money::zero();
    for item in items {
        subtotal = subtotal.checked_add(checked_valuate(item)?.line_total)?;
    }

    let taxable_amount = subtotal.checked_sub(discount)?;
    let cgst_amount = cgst.apply(taxable_amount)?;
    let sgst_amount = sgst.apply(taxable_amount)?;

    let total_before_rounding = taxable_amount
        .checked_add(cgst_amount)?
        .checked_add(sgst_amount)?;
    let grand_total = total_before_rounding.round_to_rupee();
    let round_off = grand_total.checked_sub(total_before_rounding)?;

    let warning = taxable_amount
        .is_negative()
        .then(|| TotalsWarning::NegativeTaxableAmount {
            excess: -taxable_amount,
        });

    Some(InvoiceTotals {
        subtotal,
        discount,
        taxable_amount,
        cgst_amount,
        sgst_amount,
        total_before_rounding,
        round_off,
        grand_total,
        warning,
    })
}

/// Computes totals for a coerced invoice record and the shop's rates.
pub fn compute_for(invoice: &InvoiceInput, rates: &TaxRates) -> InvoiceTotals {
    compute_totals(&invoice.items, invoice.discount, rates.cgst, rates.sgst)
}

// =============================================================================
// Unit Tests
// =============================================================================
