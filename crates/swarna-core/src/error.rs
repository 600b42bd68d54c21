//! # Error Types
//!
//! Domain-specific error types for swarna-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  swarna-core errors (this file)                                        │
//! │  ├── CoreError        - Domain rule failures                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  swarna-cli errors (app)                                               │
//! │  └── CliError         - Config, file and report failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → anyhow (main)                     │
//! │        CoreError ─────────────────► anyhow (main)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The totals calculation itself never returns an error. These types are for
//! the layer above it: deciding whether an invoice may be saved or printed.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A negative amount reached an operation that only accepts rupees ≥ 0.
    ///
    /// ## When This Occurs
    /// - Spelling out a grand total after a discount larger than the subtotal
    /// - Converting a refund-like balance into words for a printed copy
    #[error("Amount {amount} is negative")]
    NegativeAmount { amount: String },

    /// Amount is too large to be represented as whole rupees.
    #[error("Amount {amount} is out of range")]
    AmountOutOfRange { amount: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before an invoice is saved or printed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., invalid UUID, invalid invoice number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// An amount left the range the calculator can represent.
    #[error("{field} exceeds the supported amount range")]
    AmountOverflow { field: String },

    /// Discount is larger than the amount it is taken from.
    #[error("discount {discount} exceeds subtotal {subtotal}")]
    DiscountExceedsSubtotal { discount: String, subtotal: String },

    /// Line-level failure, tagged with the 1-based line number.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativeAmount {
            amount: "-500".to_string(),
        };
        assert_eq!(err.to_string(), "Amount -500 is negative");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "invoice_number".to_string(),
        };
        assert_eq!(err.to_string(), "invoice_number is required");

        let err = ValidationError::DiscountExceedsSubtotal {
            discount: "1500".to_string(),
            subtotal: "1000".to_string(),
        };
        assert_eq!(err.to_string(), "discount 1500 exceeds subtotal 1000");
    }

    #[test]
    fn test_line_error_names_the_line() {
        let err = ValidationError::Line {
            line: 2,
            source: Box::new(ValidationError::MustNotBeNegative {
                field: "net_weight".to_string(),
            }),
        };
        assert_eq!(err.to_string(), "line 2: net_weight must not be negative");
    }
}
