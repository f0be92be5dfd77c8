//! Summary
//!
//! A point-in-time snapshot of a cart and a plain-text renderer for it.

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    items::LineItem,
    pricing::{format_amount, item_count, tax_on},
};

/// Errors that can occur when rendering a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Writing to the output failed.
    #[error("failed to write summary: {0}")]
    Io(#[from] io::Error),
}

/// Derived figures for a cart at the moment it was summarised.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    items: Vec<LineItem>,
    rule_name: String,
    rule_description: String,
    subtotal: Decimal,
    discount: Decimal,
    total: Decimal,
}

impl CartSummary {
    /// Items in the cart, in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Name of the discount rule in effect
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// Description of the discount rule in effect
    pub fn rule_description(&self) -> &str {
        &self.rule_description
    }

    /// Total before discount
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Discount reported by the rule
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Total after discount
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of item quantities
    pub fn item_count(&self) -> u64 {
        item_count(&self.items)
    }

    /// Amount actually saved, i.e. the subtotal less the clamped total.
    pub fn savings(&self) -> Decimal {
        self.subtotal.saturating_sub(self.total)
    }

    /// Savings as a fraction of the subtotal. Zero for an empty cart.
    pub fn savings_percent(&self) -> Percentage {
        if self.subtotal.is_zero() {
            return Percentage::from(Decimal::ZERO);
        }

        Percentage::from(self.savings() / self.subtotal)
    }

    /// Writes the summary as a table followed by the totals.
    ///
    /// When `tax_rate` is given, tax and the taxed total are appended.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] if writing to `out` fails.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        tax_rate: Option<Decimal>,
    ) -> Result<(), SummaryError> {
        writeln!(out, "=== Shopping Cart Summary ===")?;

        if self.items.is_empty() {
            writeln!(out, "Cart is empty")?;

            return Ok(());
        }

        write_item_table(&mut out, &self.items)?;

        let mut lines = vec![
            ("Subtotal:", format_amount(self.subtotal)),
            ("Discount Strategy:", self.rule_name.clone()),
            ("Discount:", format!("-{}", format_amount(self.discount))),
            (
                "Savings:",
                format!(
                    "({:.2}%) {}",
                    percent_points(self.savings_percent()),
                    format_amount(self.savings())
                ),
            ),
            ("Total:", format_amount(self.total)),
        ];

        if let Some(rate) = tax_rate {
            let tax = tax_on(self.total, rate);

            lines.push(("Tax:", format_amount(tax)));
            lines.push((
                "Total with tax:",
                format_amount(self.total.saturating_add(tax)),
            ));
        }

        write_summary_lines(&mut out, &lines)
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            items: cart.items().to_vec(),
            rule_name: cart.rule().name(),
            rule_description: cart.rule().description(),
            subtotal: cart.subtotal(),
            discount: cart.discount(),
            total: cart.total(),
        }
    }
}

fn write_item_table(out: &mut impl io::Write, items: &[LineItem]) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Category", "Unit Price", "Qty", "Line Total"]);

    for item in items {
        builder.push_record([
            item.name().to_string(),
            item.category().to_string(),
            format_amount(item.unit_price()),
            item.quantity().to_string(),
            format_amount(item.line_total()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

fn write_summary_lines(
    out: &mut impl io::Write,
    lines: &[(&str, String)],
) -> Result<(), SummaryError> {
    let label_width = lines
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or_default();

    for (label, value) in lines {
        writeln!(out, "{label:>label_width$}  {value}")?;
    }

    Ok(())
}

fn percent_points(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}
