//! Text rendering of an invoice footer.
//!
//! ```text
//! Lakshmi Jewellers
//! Invoice INV-0042 | 2024-03-15 | Meena Iyer
//! --------------------------------------------
//!   1. 3.333 g @ ₹6,000.00 + making ₹0.00/g
//!                                 ₹19,998.00
//! --------------------------------------------
//! Subtotal                        ₹19,998.00
//! ...
//! Grand Total                     ₹20,598.00
//! --------------------------------------------
//! Rupees Twenty Thousand Five Hundred Ninety-Eight Only
//! Paid ₹0.00 | Balance ₹20,598.00 | DUE
//! ```

use swarna_core::{valuate, InvoiceInput, InvoiceSummary, Money, TaxRates};

const WIDTH: usize = 44;

fn rule(out: &mut String) {
    line(out, &"-".repeat(WIDTH));
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn row(out: &mut String, label: &str, amount: Money) {
    let pad = WIDTH.saturating_sub(label.chars().count());
    line(out, &format!("{}{:>pad$}", label, amount.to_string(), pad = pad));
}

/// Renders the text report for one invoice.
pub fn render_text(
    shop_name: &str,
    invoice: &InvoiceInput,
    rates: &TaxRates,
    summary: &InvoiceSummary,
) -> String {
    let mut out = String::new();
    let totals = &summary.totals;

    line(&mut out, shop_name);

    let mut heading = vec![format!("Invoice {}", summary.invoice_number)];
    if let Some(date) = invoice.issued_on {
        heading.push(date.format("%Y-%m-%d").to_string());
    }
    if let Some(customer) = &invoice.customer_name {
        heading.push(customer.clone());
    }
    line(&mut out, &heading.join(" | "));
    rule(&mut out);

    for (index, item) in invoice.items.iter().enumerate() {
        let value = valuate(item);
        line(
            &mut out,
            &format!(
                "{:>3}. {} g @ {} + making {}/g",
                index + 1,
                item.net_weight.normalize(),
                item.rate,
                item.making_charge
            ),
        );
        row(&mut out, "", value.line_total);
    }
    if !invoice.items.is_empty() {
        rule(&mut out);
    }

    row(&mut out, "Subtotal", totals.subtotal);
    row(&mut out, "Discount", totals.discount);
    row(&mut out, "Taxable Amount", totals.taxable_amount);
    row(
        &mut out,
        &format!("CGST @ {}%", rates.cgst.percent().normalize()),
        totals.cgst_amount,
    );
    row(
        &mut out,
        &format!("SGST @ {}%", rates.sgst.percent().normalize()),
        totals.sgst_amount,
    );
    row(&mut out, "Round Off", totals.round_off);
    row(&mut out, "Grand Total", totals.grand_total);
    rule(&mut out);

    if let Some(words) = &summary.amount_in_words {
        line(&mut out, words);
    }
    line(
        &mut out,
        &format!(
            "Paid {} | Balance {} | {}",
            summary.amount_paid,
            summary.balance_due,
            summary.payment_status.as_str().to_uppercase()
        ),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use swarna_core::LineItem;

    fn invoice() -> InvoiceInput {
        InvoiceInput {
            invoice_number: "INV-0042".to_string(),
            customer_name: Some("Meena Iyer".to_string()),
            items: vec![LineItem::new(dec!(3.333), Money::from_rupees(6000), Money::zero())],
            ..InvoiceInput::default()
        }
    }

    #[test]
    fn test_render_text_footer() {
        let invoice = invoice();
        let rates = TaxRates::from_percents(dec!(1.5), dec!(1.5));
        let summary = InvoiceSummary::build(&invoice, &rates);

        let text = render_text("Lakshmi Jewellers", &invoice, &rates, &summary);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Lakshmi Jewellers");
        assert_eq!(lines[1], "Invoice INV-0042 | Meena Iyer");
        assert!(text.contains("  1. 3.333 g @ ₹6,000.00 + making ₹0.00/g"));
        assert!(lines.iter().any(|l| l.starts_with("CGST @ 1.5%") && l.ends_with("₹299.97")));
        assert!(lines.iter().any(|l| l.starts_with("Round Off") && l.ends_with("₹0.06")));
        assert!(lines.iter().any(|l| l.starts_with("Grand Total") && l.ends_with("₹20,598.00")));
        assert!(text.contains("Rupees Twenty Thousand Five Hundred Ninety-Eight Only"));
        assert!(text.ends_with("Paid ₹0.00 | Balance ₹20,598.00 | DUE\n"));
    }

    #[test]
    fn test_render_text_without_items_or_words() {
        let invoice = InvoiceInput {
            invoice_number: "INV-0043".to_string(),
            discount: Money::from_rupees(100),
            ..InvoiceInput::default()
        };
        let rates = TaxRates::default();
        let summary = InvoiceSummary::build(&invoice, &rates);

        let text = render_text("Lakshmi Jewellers", &invoice, &rates, &summary);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Invoice INV-0043");
        assert_eq!(lines[2], "-".repeat(WIDTH));
        assert!(lines[3].starts_with("Subtotal"));
        assert!(!text.contains("Rupees"));
        assert!(text.ends_with("Paid ₹0.00 | Balance -₹100.00 | PAID\n"));
    }

    #[test]
    fn test_rows_are_right_aligned() {
        let mut out = String::new();
        row(&mut out, "Subtotal", Money::from_rupees(19998));
        assert_eq!(out.trim_end_matches('\n').chars().count(), WIDTH);
    }
}
