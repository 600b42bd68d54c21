//! Error types for the Swarna CLI.

use std::path::PathBuf;

use swarna_core::ValidationError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invoice '{invoice}' rejected: {source}")]
    Invalid {
        invoice: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invoice '{invoice}' amounts exceed the supported range")]
    Overflow { invoice: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_invoice_message() {
        let err = CliError::Invalid {
            invoice: "INV-9".to_string(),
            source: ValidationError::Required {
                field: "invoice_number".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Invoice 'INV-9' rejected: invoice_number is required"
        );
    }
}
