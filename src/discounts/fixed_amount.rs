//! Fixed Amount Discount

use rust_decimal::Decimal;
use tracing::trace;

use crate::{
    discounts::{DiscountError, DiscountRule, validate_minimum},
    items::LineItem,
    pricing::{format_amount, subtotal},
};

/// A fixed amount off the order once the subtotal reaches `minimum_purchase`.
///
/// The discount is capped at the subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedAmountDiscount {
    discount_amount: Decimal,
    minimum_purchase: Decimal,
}

impl FixedAmountDiscount {
    /// Create a new fixed amount discount.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::NegativeAmount`]: `discount_amount` is below zero.
    /// - [`DiscountError::NegativeMinimum`]: `minimum_purchase` is below zero.
    pub fn new(discount_amount: Decimal, minimum_purchase: Decimal) -> Result<Self, DiscountError> {
        if discount_amount < Decimal::ZERO {
            return Err(DiscountError::NegativeAmount(discount_amount));
        }

        Ok(Self {
            discount_amount,
            minimum_purchase: validate_minimum(minimum_purchase)?,
        })
    }

    /// Create a fixed amount discount with no minimum purchase.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::NegativeAmount`] if `discount_amount` is below zero.
    pub fn unconditional(discount_amount: Decimal) -> Result<Self, DiscountError> {
        Self::new(discount_amount, Decimal::ZERO)
    }

    /// Amount taken off the order
    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// Minimum subtotal required for the discount to apply
    pub fn minimum_purchase(&self) -> Decimal {
        self.minimum_purchase
    }
}

impl DiscountRule for FixedAmountDiscount {
    fn compute_discount(&self, items: &[LineItem]) -> Decimal {
        let total = subtotal(items);

        if total < self.minimum_purchase {
            trace!(%total, minimum = %self.minimum_purchase, "fixed discount not reached");

            return Decimal::ZERO;
        }

        self.discount_amount.min(total)
    }

    fn name(&self) -> String {
        if self.minimum_purchase > Decimal::ZERO {
            format!(
                "{} Off (Min {})",
                format_amount(self.discount_amount),
                format_amount(self.minimum_purchase)
            )
        } else {
            format!("{} Off", format_amount(self.discount_amount))
        }
    }

    fn description(&self) -> String {
        if self.minimum_purchase > Decimal::ZERO {
            format!(
                "Save {} on orders over {}",
                format_amount(self.discount_amount),
                format_amount(self.minimum_purchase)
            )
        } else {
            format!("Save {} on your order", format_amount(self.discount_amount))
        }
    }
}
