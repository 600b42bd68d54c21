//! # Record Boundary
//!
//! Turns loosely-typed rows from the backend (shop settings, invoices,
//! invoice items) into the typed inputs of the calculator.
//!
//! ## Parse With Default
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stored value            coerced to                                     │
//! │  ─────────────────────   ──────────                                     │
//! │  3.333 / "3.333"         3.333                                          │
//! │  " 1.5 "                 1.5                                            │
//! │  "1e3"                   1000                                           │
//! │  "" / null / missing     0                                              │
//! │  "abc" / [] / {}         0                                              │
//! │  true / false            1 / 0                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the only place defaults are applied. The calculator never
//! re-derives them.
//!
//! Keys are read in snake_case as stored, with camelCase accepted as a
//! fallback for rows that went through a client-side form.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::money::Money;
use crate::types::{GstRate, InvoiceInput, LineItem, TaxRates};

// =============================================================================
// Scalar Coercion
// =============================================================================

/// Coerces a record field to a decimal, defaulting to zero.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use serde_json::json;
/// use swarna_core::record::coerce_number;
///
/// assert_eq!(coerce_number(Some(&json!("1.5"))), Decimal::new(15, 1));
/// assert_eq!(coerce_number(Some(&json!("n/a"))), Decimal::ZERO);
/// assert_eq!(coerce_number(None), Decimal::ZERO);
/// ```
pub fn coerce_number(value: Option<&Value>) -> Decimal {
    match value {
        Some(Value::Number(number)) => parse_decimal(&number.to_string()),
        Some(Value::String(text)) => parse_decimal(text),
        Some(Value::Bool(true)) => Decimal::ONE,
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(text: &str) -> Decimal {
    let text = text.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}

/// Coerces a record field to an optional trimmed, non-empty string.
fn coerce_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
fn coerce_date(value: Option<&Value>) -> Option<NaiveDate> {
    let text = coerce_text(value)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(&text)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Looks a field up by its stored name, then by its form name.
fn field<'a>(record: &'a Value, snake: &str, camel: &str) -> Option<&'a Value> {
    record.get(snake).or_else(|| record.get(camel))
}

// =============================================================================
// Typed Constructors
// =============================================================================

impl LineItem {
    /// Reads an invoice item row.
    ///
    /// ## Example
    /// ```rust
    /// use serde_json::json;
    /// use swarna_core::money::Money;
    /// use swarna_core::types::LineItem;
    ///
    /// let row = json!({ "net_weight": "10", "rate": 5000, "making_charge": null });
    /// let item = LineItem::from_record(&row);
    /// assert_eq!(item.rate, Money::from_rupees(5000));
    /// assert!(item.making_charge.is_zero());
    /// ```
    pub fn from_record(record: &Value) -> Self {
        LineItem {
            net_weight: coerce_number(field(record, "net_weight", "netWeight")),
            rate: Money::new(coerce_number(record.get("rate"))),
            making_charge: Money::new(coerce_number(field(
                record,
                "making_charge",
                "makingCharge",
            ))),
        }
    }
}

impl TaxRates {
    /// Reads the GST rates from a shop settings row. Unset rates are 0%.
    pub fn from_settings(record: &Value) -> Self {
        TaxRates {
            cgst: GstRate::from_percent(coerce_number(field(record, "cgst_rate", "cgstRate"))),
            sgst: GstRate::from_percent(coerce_number(field(record, "sgst_rate", "sgstRate"))),
        }
    }
}

impl InvoiceInput {
    /// Reads an invoice row together with its embedded item rows.
    ///
    /// Items come from `items`, or `invoice_items` as returned by a joined
    /// select. Anything that is not an array yields no items.
    pub fn from_record(record: &Value) -> Self {
        let items = record
            .get("items")
            .or_else(|| record.get("invoice_items"))
            .and_then(Value::as_array)
            .map(|rows| rows.iter().map(LineItem::from_record).collect())
            .unwrap_or_default();

        InvoiceInput {
            invoice_number: coerce_text(field(record, "invoice_number", "invoiceNumber"))
                .unwrap_or_default(),
            issued_on: coerce_date(field(record, "invoice_date", "invoiceDate"))
                .or_else(|| coerce_date(field(record, "created_at", "createdAt"))),
            customer_name: coerce_text(field(record, "customer_name", "customerName")),
            discount: Money::new(coerce_number(record.get("discount"))),
            amount_paid: Money::new(coerce_number(field(record, "amount_paid", "amountPaid"))),
            items,
        }
    }
}

/// Reads a JSON document holding either one invoice row or an array of them.
pub fn invoices_from_document(document: &Value) -> Vec<InvoiceInput> {
    match document {
        Value::Array(rows) => rows.iter().map(InvoiceInput::from_record).collect(),
        row => vec![InvoiceInput::from_record(row)],
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
