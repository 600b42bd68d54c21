//! CLI configuration module.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SWARNA_*`)
//! 2. Config file (`--config PATH`, else `swarna.toml` if present)
//! 3. Defaults (this file)
//!
//! A `--settings` shop record given on the command line overrides the GST
//! rates resolved here; see [`AppConfig::tax_rates`].

use std::path::Path;

use clap::ValueEnum;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use swarna_core::TaxRates;

use crate::error::CliResult;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "swarna.toml";

/// Environment variable prefix (`SWARNA_CGST_RATE`, ...).
const ENV_PREFIX: &str = "SWARNA";

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable invoice footer
    #[default]
    Text,
    /// Pretty-printed `InvoiceSummary` JSON
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shop name printed above text reports
    pub shop_name: String,

    /// CGST percentage used when no settings record is given
    pub cgst_rate: Decimal,

    /// SGST percentage used when no settings record is given
    pub sgst_rate: Decimal,

    /// tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Default report format
    pub output_format: OutputFormat,
}

impl AppConfig {
    /// Loads configuration from defaults, the config file and the environment.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        Ok(Self::build(path, Environment::with_prefix(ENV_PREFIX))?)
    }

    /// Loads configuration with an explicit environment source.
    fn build(path: Option<&Path>, env: Environment) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        defaults()?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Shop GST rates from configuration.
    pub fn tax_rates(&self) -> TaxRates {
        TaxRates::from_percents(self.cgst_rate, self.sgst_rate)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    Config::builder()
        .set_default("shop_name", "Swarna Jewellers")?
        .set_default("cgst_rate", "0")?
        .set_default("sgst_rate", "0")?
        .set_default("log_filter", "info,swarna=debug")?
        .set_default("output_format", "text")
}
