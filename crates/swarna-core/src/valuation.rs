//! # Line Valuation
//!
//! Prices a single jewellery line from its weight, metal rate and per-gram
//! making charge.
//!
//! ```text
//! net_weight ──┬──► × rate ─────────────┐
//!              │                        ├──► line_total
//!              └──► × making_charge ──► making_amount
//! ```
//!
//! Pure and infallible. Inputs are not validated here; see
//! [`crate::validation::validate_line_item`] for that.
//!
//! Weights and rates come straight from loose records, so their product can
//! leave the `Decimal` range. [`checked_valuate`] reports that as `None`;
//! [`valuate`] clamps to the range instead.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::LineItem;

/// The two figures printed on each invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineValuation {
    /// `net_weight × making_charge`
    pub making_amount: Money,
    /// `net_weight × rate + making_amount`
    pub line_total: Money,
}

/// Values one line item.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use swarna_core::money::Money;
/// use swarna_core::types::LineItem;
/// use swarna_core::valuation::valuate;
///
/// let ring = LineItem::new(Decimal::from(10), Money::from_rupees(5000), Money::from_rupees(200));
/// let value = valuate(&ring);
/// assert_eq!(value.making_amount, Money::from_rupees(2000));
/// assert_eq!(value.line_total, Money::from_rupees(52000));
/// ```
pub fn valuate(item: &LineItem) -> LineValuation {
    checked_valuate(item).unwrap_or_else(|| {
        let making_amount = item.making_charge.saturating_mul(item.net_weight);
        let line_total = item
            .rate
            .saturating_mul(item.net_weight)
            .saturating_add(making_amount);

        LineValuation {
            making_amount,
            line_total,
        }
    })
}

/// Values one line item, or `None` if any step overflows.
pub fn checked_valuate(item: &LineItem) -> Option<LineValuation> {
    let making_amount = item.making_charge.checked_mul(item.net_weight)?;
    let line_total = item
        .rate
        .checked_mul(item.net_weight)?
        .checked_add(making_amount)?;

    Some(LineValuation {
        making_amount,
        line_total,
    })
}
