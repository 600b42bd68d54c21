//! # Invoice Summary
//!
//! The one presentation contract every consumer renders from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InvoiceInput + TaxRates                                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  InvoiceSummary::build ──► compute_totals                               │
//! │        │                                                                │
//! │        ├──► on-screen invoice view                                      │
//! │        ├──► print / PDF template                                        │
//! │        └──► ExportRow ──► spreadsheet export                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because every surface goes through [`InvoiceSummary::build`], the screen,
//! the printed copy and the export always show the same numbers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ledger::{compute_for, InvoiceTotals};
use crate::money::Money;
use crate::types::{InvoiceInput, PaymentStatus, TaxRates};
use crate::words::rupees_in_words;

// =============================================================================
// Summary
// =============================================================================

/// Totals plus the figures printed alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceSummary {
    pub invoice_number: String,
    pub totals: InvoiceTotals,
    /// "Rupees ... Only"; absent when the grand total is negative or the
    /// totals overflowed.
    pub amount_in_words: Option<String>,
    pub amount_paid: Money,
    /// `grand_total - amount_paid`
    pub balance_due: Money,
    pub payment_status: PaymentStatus,
}

impl InvoiceSummary {
    /// Computes the summary for one invoice.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use swarna_core::money::Money;
    /// use swarna_core::summary::InvoiceSummary;
    /// use swarna_core::types::{InvoiceInput, LineItem, PaymentStatus, TaxRates};
    ///
    /// let invoice = InvoiceInput {
    ///     invoice_number: "INV-0042".to_string(),
    ///     amount_paid: Money::from_rupees(50000),
    ///     items: vec![LineItem::new(Decimal::from(10), Money::from_rupees(5000), Money::from_rupees(200))],
    ///     ..InvoiceInput::default()
    /// };
    /// let rates = TaxRates::from_percents(Decimal::new(15, 1), Decimal::new(15, 1));
    ///
    /// let summary = InvoiceSummary::build(&invoice, &rates);
    /// assert_eq!(summary.balance_due, Money::from_rupees(3560));
    /// assert_eq!(summary.payment_status, PaymentStatus::Due);
    /// ```
    pub fn build(invoice: &InvoiceInput, rates: &TaxRates) -> Self {
        let totals = compute_for(invoice, rates);
        let amount_in_words = if totals.has_overflowed() {
            None
        } else {
            totals
                .grand_total
                .whole_rupees_unsigned()
                .ok()
                .map(rupees_in_words)
        };
        let balance_due = totals.grand_total.saturating_sub(invoice.amount_paid);

        InvoiceSummary {
            invoice_number: invoice.invoice_number.clone(),
            totals,
            amount_in_words,
            amount_paid: invoice.amount_paid,
            balance_due,
            payment_status: PaymentStatus::for_balance(balance_due),
        }
    }
}

// =============================================================================
// Export Row
// =============================================================================

/// One flat spreadsheet row per invoice.
///
/// Amounts are normalised (`52000`, not `52000.000`) so the sheet does not
/// show stray trailing zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportRow {
    pub invoice_number: String,
    #[ts(as = "Option<String>")]
    pub issued_on: Option<NaiveDate>,
    pub customer_name: Option<String>,
    pub item_count: usize,
    pub subtotal: Money,
    pub discount: Money,
    pub taxable_amount: Money,
    pub cgst_amount: Money,
    pub sgst_amount: Money,
    pub round_off: Money,
    pub grand_total: Money,
    pub amount_paid: Money,
    pub balance_due: Money,
    pub payment_status: PaymentStatus,
}

impl ExportRow {
    /// Builds the export row for one invoice.
    pub fn build(invoice: &InvoiceInput, rates: &TaxRates) -> Self {
        Self::from_summary(invoice, &InvoiceSummary::build(invoice, rates))
    }

    /// Flattens an already computed summary.
    pub fn from_summary(invoice: &InvoiceInput, summary: &InvoiceSummary) -> Self {
        let totals = &summary.totals;
        ExportRow {
            invoice_number: summary.invoice_number.clone(),
            issued_on: invoice.issued_on,
            customer_name: invoice.customer_name.clone(),
            item_count: invoice.items.len(),
            subtotal: totals.subtotal.normalize(),
            discount: totals.discount.normalize(),
            taxable_amount: totals.taxable_amount.normalize(),
            cgst_amount: totals.cgst_amount.normalize(),
            sgst_amount: totals.sgst_amount.normalize(),
            round_off: totals.round_off.normalize(),
            grand_total: totals.grand_total.normalize(),
            amount_paid: summary.amount_paid.normalize(),
            balance_due: summary.balance_due.normalize(),
            payment_status: summary.payment_status,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;
    use rust_decimal_macros::dec;

    fn rates() -> TaxRates {
        TaxRates::from_percents(dec!(1.5), dec!(1.5))
    }

    fn chain_invoice(paid: i64) -> InvoiceInput {
        InvoiceInput {
            invoice_number: "INV-0007".to_string(),
            issued_on: NaiveDate::from_ymd_opt(2024, 3, 15),
            customer_name: Some("Meena Iyer".to_string()),
            amount_paid: Money::from_rupees(paid),
            items: vec![LineItem::new(dec!(3.333), Money::from_rupees(6000), Money::zero())],
            ..InvoiceInput::default()
        }
    }

    #[test]
    fn test_summary_fully_paid() {
        let summary = InvoiceSummary::build(&chain_invoice(20598), &rates());

        assert_eq!(summary.totals.grand_total, Money::from_rupees(20598));
        assert_eq!(
            summary.amount_in_words.as_deref(),
            Some("Rupees Twenty Thousand Five Hundred Ninety-Eight Only")
        );
        assert!(summary.balance_due.is_zero());
        assert_eq!(summary.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_summary_partly_paid_is_due() {
        let summary = InvoiceSummary::build(&chain_invoice(20000), &rates());
        assert_eq!(summary.balance_due, Money::from_rupees(598));
        assert_eq!(summary.payment_status, PaymentStatus::Due);
    }

    #[test]
    fn test_summary_negative_total_has_no_words() {
        let mut invoice = chain_invoice(0);
        invoice.discount = Money::from_rupees(25000);

        let summary = InvoiceSummary::build(&invoice, &rates());
        assert!(summary.totals.grand_total.is_negative());
        assert_eq!(summary.amount_in_words, None);
        assert_eq!(summary.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_summary_of_huge_record_reports_overflow() {
        let record = serde_json::json!({
            "invoice_number": "INV-0099",
            "items": [{ "net_weight": "1e15", "rate": "1e15" }]
        });
        let invoice = InvoiceInput::from_record(&record);

        let summary = InvoiceSummary::build(&invoice, &TaxRates::default());
        assert!(summary.totals.has_overflowed());
        assert_eq!(summary.amount_in_words, None);
        assert!(summary.balance_due.is_zero());
    }

    #[test]
    fn test_export_row_matches_summary() {
        let invoice = chain_invoice(20000);
        let row = ExportRow::build(&invoice, &rates());

        assert_eq!(row.invoice_number, "INV-0007");
        assert_eq!(row.issued_on, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(row.item_count, 1);
        assert_eq!(row.subtotal, Money::from_rupees(19998));
        assert_eq!(row.cgst_amount, Money::new(dec!(299.97)));
        assert_eq!(row.round_off, Money::new(dec!(0.06)));
        assert_eq!(row.grand_total, Money::from_rupees(20598));
        assert_eq!(row.balance_due, Money::from_rupees(598));
        assert_eq!(row.payment_status, PaymentStatus::Due);
    }

    #[test]
    fn test_export_row_serializes_trimmed_amounts() {
        let row = ExportRow::build(&chain_invoice(0), &rates());
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["subtotal"], "19998");
        assert_eq!(json["cgst_amount"], "299.97");
        assert_eq!(json["issued_on"], "2024-03-15");
        assert_eq!(json["payment_status"], "due");
    }
}
