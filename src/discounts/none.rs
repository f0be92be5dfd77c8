//! No Discount

use rust_decimal::Decimal;

use crate::{discounts::DiscountRule, items::LineItem};

/// Rule that never discounts anything. The default for a new cart.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NoDiscount;

impl DiscountRule for NoDiscount {
    fn compute_discount(&self, _items: &[LineItem]) -> Decimal {
        Decimal::ZERO
    }

    fn name(&self) -> String {
        "No Discount".to_string()
    }

    fn description(&self) -> String {
        "No discount is applied to the total amount.".to_string()
    }
}
