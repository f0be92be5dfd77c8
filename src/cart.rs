//! Cart

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    discounts::{DiscountRule, NoDiscount},
    items::LineItem,
    pricing::{self, format_amount, tax_on},
    summary::CartSummary,
};

/// Shopping cart holding line items and the active discount rule.
///
/// All totals are derived on demand from the current items and rule, so swapping the
/// rule is reflected by the next call.
#[derive(Debug)]
pub struct Cart {
    items: Vec<LineItem>,
    rule: Box<dyn DiscountRule>,
}

impl Cart {
    /// Create an empty cart with no discount.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rule(NoDiscount)
    }

    /// Create an empty cart with the given discount rule.
    #[must_use]
    pub fn with_rule(rule: impl DiscountRule + 'static) -> Self {
        Cart {
            items: Vec::new(),
            rule: Box::new(rule),
        }
    }

    /// Append an item to the cart.
    pub fn add_item(&mut self, item: LineItem) {
        debug!(item = item.name(), quantity = item.quantity(), "adding item");

        self.items.push(item);
    }

    /// Remove the first item equal to `item`.
    ///
    /// Returns `false`, leaving the cart untouched, when no item matches.
    pub fn remove_item(&mut self, item: &LineItem) -> bool {
        let Some(position) = self.items.iter().position(|existing| existing == item) else {
            return false;
        };

        self.items.remove(position);

        debug!(item = item.name(), position, "removed item");

        true
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        debug!(removed = self.items.len(), "clearing cart");

        self.items.clear();
    }

    /// Replace the active discount rule.
    pub fn set_rule(&mut self, rule: impl DiscountRule + 'static) {
        debug!(from = %self.rule.name(), to = %rule.name(), "switching discount rule");

        self.rule = Box::new(rule);
    }

    /// The active discount rule.
    pub fn rule(&self) -> &dyn DiscountRule {
        self.rule.as_ref()
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of line totals before any discount.
    pub fn subtotal(&self) -> Decimal {
        pricing::subtotal(&self.items)
    }

    /// Discount calculated by the active rule.
    pub fn discount(&self) -> Decimal {
        self.rule.compute_discount(&self.items)
    }

    /// Subtotal less discount, never below zero.
    pub fn total(&self) -> Decimal {
        self.subtotal()
            .saturating_sub(self.discount())
            .max(Decimal::ZERO)
    }

    /// Tax on the discounted total, with `rate` as a percentage (e.g. `8.5`).
    pub fn tax(&self, rate: Decimal) -> Decimal {
        tax_on(self.total(), rate)
    }

    /// Discounted total plus tax at `rate` percent.
    pub fn total_with_tax(&self, rate: Decimal) -> Decimal {
        self.total().saturating_add(self.tax(rate))
    }

    /// Sum of all item quantities.
    pub fn item_count(&self) -> u64 {
        pricing::item_count(&self.items)
    }

    /// Number of line entries, ignoring quantities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the cart's items and derived figures.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShoppingCart[items={}, subtotal={}, discount={}, total={}]",
            self.item_count(),
            format_amount(self.subtotal()),
            format_amount(self.discount()),
            format_amount(self.total())
        )
    }
}
