//! # Swarna CLI
//!
//! Invoice totals, amount in words, and spreadsheet export rows from the
//! command line.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  swarna totals INVOICE.json [--settings SHOP.json] [--format json]      │
//! │      └── footer of one invoice (text or InvoiceSummary JSON)            │
//! │                                                                         │
//! │  swarna words 20597.94                                                  │
//! │      └── "Rupees Twenty Thousand Five Hundred Ninety-Eight Only"        │
//! │                                                                         │
//! │  swarna export A.json B.json ...                                        │
//! │      └── one ExportRow JSON line per invoice                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command goes through swarna-core, so the numbers match what the
//! invoice screen and the printed copy show.

mod config;
mod error;
mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::Value;
use swarna_core::record::invoices_from_document;
use swarna_core::validation::validate_invoice;
use swarna_core::{
    rupees_in_words, ExportRow, InvoiceInput, InvoiceSummary, Money, TaxRates, TotalsWarning,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, OutputFormat};
use crate::error::{CliError, CliResult};

#[derive(Debug, Parser)]
#[command(name = "swarna", version, about = "Jewellery invoice totals and exports")]
struct Cli {
    /// Config file (defaults to ./swarna.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the totals block of one invoice
    Totals {
        /// Invoice row (with its items) as JSON
        invoice: PathBuf,

        /// Shop settings row providing cgst_rate / sgst_rate
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Reject invoices that fail validation instead of warning
        #[arg(long)]
        strict: bool,
    },

    /// Spell an amount in words, rounded to whole rupees
    Words {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Write one export row per invoice as JSON lines
    Export {
        /// Files holding one invoice row or an array of them
        #[arg(required = true)]
        invoices: Vec<PathBuf>,

        /// Shop settings row providing cgst_rate / sgst_rate
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Reject invoices that fail validation instead of warning
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    init_tracing(&config.log_filter);
    debug!(shop = %config.shop_name, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Totals {
            invoice,
            settings,
            format,
            strict,
        } => {
            let rates = resolve_rates(&config, settings.as_deref())?;
            let format = format.unwrap_or(config.output_format);
            run_totals(&config, &invoice, &rates, format, strict, &mut out)?;
        }
        Command::Words { amount } => {
            let rupees = Money::new(amount).whole_rupees_unsigned()?;
            writeln!(out, "{}", rupees_in_words(rupees))?;
        }
        Command::Export {
            invoices,
            settings,
            strict,
        } => {
            let rates = resolve_rates(&config, settings.as_deref())?;
            let count = run_export(&invoices, &rates, strict, &mut out)?;
            info!(count, "Export complete");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so stdout
/// stays clean for reports and JSON.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json(path: &Path) -> CliResult<Value> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// GST rates from a settings record when given, otherwise from config.
fn resolve_rates(config: &AppConfig, settings: Option<&Path>) -> CliResult<TaxRates> {
    let rates = match settings {
        Some(path) => TaxRates::from_settings(&read_json(path)?),
        None => config.tax_rates(),
    };
    debug!(
        cgst = %rates.cgst.percent(),
        sgst = %rates.sgst.percent(),
        from_settings = settings.is_some(),
        "GST rates resolved"
    );
    Ok(rates)
}

/// Applies the validation policy: reject under `--strict`, warn otherwise.
fn check_invoice(invoice: &InvoiceInput, rates: &TaxRates, strict: bool) -> CliResult<()> {
    match validate_invoice(invoice, rates) {
        Ok(()) => Ok(()),
        Err(source) if strict => Err(CliError::Invalid {
            invoice: invoice.invoice_number.clone(),
            source,
        }),
        Err(reason) => {
            warn!(invoice = %invoice.invoice_number, %reason, "Invoice failed validation");
            Ok(())
        }
    }
}

/// Builds the summary. Overflowed totals are refused with or without `--strict`.
fn summarize(invoice: &InvoiceInput, rates: &TaxRates) -> CliResult<InvoiceSummary> {
    let summary = InvoiceSummary::build(invoice, rates);

    match summary.totals.warning {
        Some(TotalsWarning::Overflow) => {
            return Err(CliError::Overflow {
                invoice: invoice.invoice_number.clone(),
            })
        }
        Some(TotalsWarning::NegativeTaxableAmount { excess }) => warn!(
            invoice = %summary.invoice_number,
            %excess,
            "Discount exceeds subtotal, grand total is negative"
        ),
        None => {}
    }
    debug!(
        invoice = %summary.invoice_number,
        grand_total = %summary.totals.grand_total,
        round_off = %summary.totals.round_off,
        "Totals computed"
    );
    Ok(summary)
}

fn run_totals(
    config: &AppConfig,
    path: &Path,
    rates: &TaxRates,
    format: OutputFormat,
    strict: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let invoice = InvoiceInput::from_record(&read_json(path)?);
    check_invoice(&invoice, rates, strict)?;

    let summary = summarize(&invoice, rates)?;

    match format {
        OutputFormat::Text => {
            let text = report::render_text(&config.shop_name, &invoice, rates, &summary);
            out.write_all(text.as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes export rows and returns how many were written.
fn run_export(
    paths: &[PathBuf],
    rates: &TaxRates,
    strict: bool,
    out: &mut impl Write,
) -> CliResult<usize> {
    let mut count = 0;
    for path in paths {
        let invoices = invoices_from_document(&read_json(path)?);
        debug!(path = %path.display(), invoices = invoices.len(), "Invoice file read");

        for invoice in &invoices {
            check_invoice(invoice, rates, strict)?;
            let summary = summarize(invoice, rates)?;

            serde_json::to_writer(&mut *out, &ExportRow::from_summary(invoice, &summary))?;
            writeln!(out)?;
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use swarna_core::ValidationError;

    fn test_config() -> AppConfig {
        AppConfig {
            shop_name: "Lakshmi Jewellers".to_string(),
            cgst_rate: dec!(1.5),
            sgst_rate: dec!(1.5),
            log_filter: "info".to_string(),
            output_format: OutputFormat::Text,
        }
    }

    fn json_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    const RING: &str = r#"{
        "invoice_number": "INV-0001",
        "invoice_date": "2024-03-15",
        "items": [{ "net_weight": 10, "rate": 5000, "making_charge": 200 }]
    }"#;

    #[test]
    fn test_cli_parses_commands() {
        let cli = Cli::try_parse_from(["swarna", "totals", "inv.json", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Totals { format: Some(OutputFormat::Json), strict: false, .. }
        ));

        let cli = Cli::try_parse_from(["swarna", "words", "-10.5"]).unwrap();
        assert!(matches!(cli.command, Command::Words { amount } if amount == dec!(-10.5)));

        assert!(Cli::try_parse_from(["swarna", "export"]).is_err());
    }

    #[test]
    fn test_resolve_rates_prefers_settings_record() {
        let dir = tempfile::tempdir().unwrap();
        let settings = json_file(&dir, "shop.json", r#"{ "cgst_rate": "2.5", "sgst_rate": 2.5 }"#);

        let from_config = resolve_rates(&test_config(), None).unwrap();
        assert_eq!(from_config, TaxRates::from_percents(dec!(1.5), dec!(1.5)));

        let from_record = resolve_rates(&test_config(), Some(&settings)).unwrap();
        assert_eq!(from_record, TaxRates::from_percents(dec!(2.5), dec!(2.5)));
    }

    #[test]
    fn test_run_totals_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = json_file(&dir, "inv.json", RING);
        let config = test_config();

        let mut out = Vec::new();
        run_totals(&config, &path, &config.tax_rates(), OutputFormat::Json, true, &mut out).unwrap();

        let summary: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(summary["invoice_number"], "INV-0001");
        assert_eq!(summary["totals"]["grand_total"], "53560");
        assert_eq!(
            summary["amount_in_words"],
            "Rupees Fifty-Three Thousand Five Hundred Sixty Only"
        );
    }

    #[test]
    fn test_run_totals_strict_rejects_negative_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = json_file(
            &dir,
            "inv.json",
            r#"{ "invoice_number": "INV-0002", "discount": 1500,
                 "items": [{ "net_weight": 1, "rate": 1000 }] }"#,
        );
        let config = test_config();

        let mut out = Vec::new();
        let err = run_totals(&config, &path, &config.tax_rates(), OutputFormat::Text, true, &mut out)
            .unwrap_err();
        assert!(matches!(err, CliError::Invalid { ref invoice, .. } if invoice == "INV-0002"));
        assert!(out.is_empty());

        let mut out = Vec::new();
        run_totals(&config, &path, &config.tax_rates(), OutputFormat::Text, false, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Grand Total"));
    }

    #[test]
    fn test_run_export_writes_one_line_per_invoice() {
        let dir = tempfile::tempdir().unwrap();
        let single = json_file(&dir, "one.json", RING);
        let batch = json_file(
            &dir,
            "batch.json",
            r#"[
                { "invoice_number": "INV-0002", "amount_paid": 19998,
                  "items": [{ "net_weight": "3.333", "rate": 6000 }] },
                { "invoice_number": "INV-0003", "items": [] }
            ]"#,
        );

        let mut out = Vec::new();
        let count = run_export(
            &[single, batch],
            &TaxRates::from_percents(dec!(1.5), dec!(1.5)),
            true,
            &mut out,
        )
        .unwrap();
        assert_eq!(count, 3);

        let rows: Vec<ExportRow> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(rows[0].grand_total, Money::from_rupees(53560));
        assert_eq!(rows[1].grand_total, Money::from_rupees(20598));
        assert_eq!(rows[1].balance_due, Money::from_rupees(600));
        assert!(rows[2].grand_total.is_zero());
    }

    #[test]
    fn test_huge_amounts_are_rejected_even_without_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = json_file(
            &dir,
            "huge.json",
            r#"{ "invoice_number": "INV-0004",
                 "items": [{ "net_weight": "1e15", "rate": "1e15" }] }"#,
        );
        let config = test_config();

        let mut out = Vec::new();
        let err = run_totals(&config, &path, &config.tax_rates(), OutputFormat::Json, true, &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Invalid { source: ValidationError::AmountOverflow { .. }, .. }
        ));

        let mut out = Vec::new();
        let err = run_totals(&config, &path, &config.tax_rates(), OutputFormat::Json, false, &mut out)
            .unwrap_err();
        assert!(matches!(err, CliError::Overflow { ref invoice } if invoice == "INV-0004"));
        assert!(out.is_empty());

        let mut out = Vec::new();
        let err = run_export(&[path], &config.tax_rates(), false, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Overflow { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_read_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let broken = json_file(&dir, "broken.json", "{ not json");

        assert!(matches!(read_json(&broken), Err(CliError::Parse { .. })));
        assert!(matches!(
            read_json(&dir.path().join("missing.json")),
            Err(CliError::Read { .. })
        ));
    }
}
