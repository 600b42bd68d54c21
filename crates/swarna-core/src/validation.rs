//! # Validation Module
//!
//! Business-rule checks applied one layer above the calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Record boundary (crate::record)                              │
//! │  └── Malformed numbers coerced to 0, never rejected                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculator (crate::ledger)                                   │
//! │  └── Always returns totals, flags anomalies in `warning`               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Line fields must not be negative                                  │
//! │  ├── GST rates must be 0-100%                                          │
//! │  ├── An invoice with a negative grand total must not be saved          │
//! │  └── Nor one whose amounts overflowed                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use swarna_core::money::Money;
//! use swarna_core::validation::{validate_discount, validate_invoice_number};
//!
//! assert!(validate_invoice_number("INV-0042").is_ok());
//! assert!(validate_discount(Money::from_rupees(-1)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::ledger::{compute_for, InvoiceTotals, TotalsWarning};
use crate::money::Money;
use crate::types::{GstRate, InvoiceInput, LineItem, TaxRates};
use crate::MAX_INVOICE_ITEMS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest invoice number accepted.
const MAX_INVOICE_NUMBER_LEN: usize = 50;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an invoice number.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Letters, digits, `-`, `_` and `/` only ("INV/24-25/0042")
pub fn validate_invoice_number(number: &str) -> ValidationResult<()> {
    let number = number.trim();

    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "invoice_number".to_string(),
        });
    }

    if number.chars().count() > MAX_INVOICE_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "invoice_number".to_string(),
            max: MAX_INVOICE_NUMBER_LEN,
        });
    }

    if !number
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '/'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "invoice_number".to_string(),
            reason: "must contain only letters, numbers, hyphens, underscores, and slashes"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a UUID string format (shop and invoice ids).
///
/// ## Example
/// ```rust
/// use swarna_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_non_negative(value: Decimal, field: &str) -> ValidationResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a line item: weight, rate and making charge must be ≥ 0.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    require_non_negative(item.net_weight, "net_weight")?;
    require_non_negative(item.rate.amount(), "rate")?;
    require_non_negative(item.making_charge.amount(), "making_charge")?;
    Ok(())
}

/// Validates a GST rate.
///
/// ## Rules
/// - Must be between 0% and 100%
/// - Jewellery is normally 1.5% + 1.5%
pub fn validate_gst_rate(rate: GstRate, field: &str) -> ValidationResult<()> {
    let percent = rate.percent();
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

/// Validates both halves of the shop's GST configuration.
pub fn validate_tax_rates(rates: &TaxRates) -> ValidationResult<()> {
    validate_gst_rate(rates.cgst, "cgst_rate")?;
    validate_gst_rate(rates.sgst, "sgst_rate")?;
    Ok(())
}

/// Validates a discount amount (must be ≥ 0).
pub fn validate_discount(discount: Money) -> ValidationResult<()> {
    require_non_negative(discount.amount(), "discount")
}

/// Validates the number of lines on one invoice.
pub fn validate_item_count(count: usize) -> ValidationResult<()> {
    if count > MAX_INVOICE_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 0,
            max: MAX_INVOICE_ITEMS as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Totals Validators
// =============================================================================

/// Refuses totals that must not be persisted.
///
/// The calculator computes through a discount larger than the subtotal; this
/// is where such an invoice is stopped before it is saved or shared.
pub fn validate_totals_for_save(totals: &InvoiceTotals) -> ValidationResult<()> {
    match totals.warning {
        Some(TotalsWarning::Overflow) => Err(ValidationError::AmountOverflow {
            field: "grand_total".to_string(),
        }),
        Some(TotalsWarning::NegativeTaxableAmount { .. }) => {
            Err(ValidationError::DiscountExceedsSubtotal {
                discount: totals.discount.amount().normalize().to_string(),
                subtotal: totals.subtotal.amount().normalize().to_string(),
            })
        }
        None => require_non_negative(totals.grand_total.amount(), "grand_total"),
    }
}

/// Runs every check for one invoice against the shop's rates.
///
/// Line failures carry the 1-based line number.
pub fn validate_invoice(invoice: &InvoiceInput, rates: &TaxRates) -> ValidationResult<()> {
    validate_invoice_number(&invoice.invoice_number)?;
    validate_item_count(invoice.items.len())?;
    validate_discount(invoice.discount)?;
    validate_tax_rates(rates)?;

    for (index, item) in invoice.items.iter().enumerate() {
        validate_line_item(item).map_err(|source| ValidationError::Line {
            line: index + 1,
            source: Box::new(source),
        })?;
    }

    validate_totals_for_save(&compute_for(invoice, rates))
}

// =============================================================================
// Unit Tests
// =============================================================================
