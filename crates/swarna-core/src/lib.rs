//! # swarna-core: Pure Invoice Logic for Swarna
//!
//! This crate holds the invoice arithmetic of the jewellery back office as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Swarna Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Consumers: invoice view, print/PDF, export, CLI          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ swarna-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌───────────┐  ┌──────────┐  ┌──────────────┐  │   │
//! │  │   │  record  │─►│ valuation │─►│  ledger  │─►│   summary    │  │   │
//! │  │   │ coercion │  │ per line  │  │ GST, R/O │  │ words, paid  │  │   │
//! │  │   └──────────┘  └───────────┘  └──────────┘  └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, TaxRates, InvoiceInput, ...)
//! - [`money`] - Exact decimal `Money` with rupee formatting
//! - [`valuation`] - Value of one invoice line
//! - [`ledger`] - Invoice totals: discount, CGST/SGST, round off
//! - [`words`] - Amount in words on the Indian scale
//! - [`record`] - Coercion of loose backend rows into typed inputs
//! - [`validation`] - Business rules checked before saving
//! - [`summary`] - Summary and export row shared by every consumer
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, bit for bit
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: no binary floating point on the calculation path
//! 4. **Computed, Never Stored**: totals are recomputed on every call
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use swarna_core::{InvoiceInput, InvoiceSummary, Money, TaxRates};
//!
//! let shop = json!({ "cgst_rate": 1.5, "sgst_rate": 1.5 });
//! let row = json!({
//!     "invoice_number": "INV-0042",
//!     "items": [{ "net_weight": 10, "rate": 5000, "making_charge": 200 }]
//! });
//!
//! let summary = InvoiceSummary::build(&InvoiceInput::from_record(&row), &TaxRates::from_settings(&shop));
//! assert_eq!(summary.totals.grand_total, Money::from_rupees(53560));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod record;
pub mod summary;
pub mod types;
pub mod validation;
pub mod valuation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{compute_for, compute_totals, InvoiceTotals, TotalsWarning};
pub use money::Money;
pub use summary::{ExportRow, InvoiceSummary};
pub use types::*;
pub use valuation::{checked_valuate, valuate, LineValuation};
pub use words::{rupees_in_words, to_words};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed on a single invoice.
///
/// ## Business Reason
/// Bulk-entry grids can paste hundreds of rows by accident; a real counter
/// invoice rarely has more than a few dozen pieces.
pub const MAX_INVOICE_ITEMS: usize = 200;
