//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};

use crate::items::LineItem;

/// Calculates the sum of line totals for a list of items.
///
/// An empty list totals to zero.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()))
}

/// Sums the quantities of a list of items.
pub fn item_count(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

/// Calculates tax on `amount` at `rate` percent, saturating instead of overflowing.
pub fn tax_on(amount: Decimal, rate: Decimal) -> Decimal {
    amount.saturating_mul(rate) / Decimal::ONE_HUNDRED
}

/// Formats an amount as dollars with two decimal places, rounding half away from zero.
///
/// Negative amounts carry the sign before the currency symbol (e.g. `-$0.05`).
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    format!("{sign}${:.2}", rounded.abs())
}

/// Formats a 0-100 percentage value as a whole number.
pub fn format_percent(percentage: Decimal) -> String {
    let rounded = percentage.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.0}")
}
