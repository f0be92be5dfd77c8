//! Percentage Discount
//!
//! A percentage off the whole order, optionally gated on a minimum subtotal.

use rust_decimal::Decimal;
use tracing::trace;

use crate::{
    discounts::{DiscountError, DiscountRule, percent_of, validate_minimum, validate_percentage},
    items::LineItem,
    pricing::{format_amount, format_percent, subtotal},
};

/// Percentage off the order subtotal once it reaches `minimum_amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageDiscount {
    percentage: Decimal,
    minimum_amount: Decimal,
}

impl PercentageDiscount {
    /// Create a new percentage discount.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::PercentageOutOfRange`]: `percentage` is outside `0..=100`.
    /// - [`DiscountError::NegativeMinimum`]: `minimum_amount` is below zero.
    pub fn new(percentage: Decimal, minimum_amount: Decimal) -> Result<Self, DiscountError> {
        Ok(Self {
            percentage: validate_percentage(percentage)?,
            minimum_amount: validate_minimum(minimum_amount)?,
        })
    }

    /// Create a percentage discount with no minimum spend.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::PercentageOutOfRange`] if `percentage` is outside `0..=100`.
    pub fn unconditional(percentage: Decimal) -> Result<Self, DiscountError> {
        Self::new(percentage, Decimal::ZERO)
    }

    /// Discount percentage, 0-100
    pub fn percentage(&self) -> Decimal {
        self.percentage
    }

    /// Minimum subtotal required for the discount to apply
    pub fn minimum_amount(&self) -> Decimal {
        self.minimum_amount
    }
}

impl DiscountRule for PercentageDiscount {
    fn compute_discount(&self, items: &[LineItem]) -> Decimal {
        let total = subtotal(items);

        if total < self.minimum_amount {
            trace!(%total, minimum = %self.minimum_amount, "percentage discount not reached");

            return Decimal::ZERO;
        }

        percent_of(self.percentage, total)
    }

    fn name(&self) -> String {
        if self.minimum_amount > Decimal::ZERO {
            format!(
                "{}% Off (Min {})",
                format_percent(self.percentage),
                format_amount(self.minimum_amount)
            )
        } else {
            format!("{}% Off", format_percent(self.percentage))
        }
    }

    fn description(&self) -> String {
        if self.minimum_amount > Decimal::ZERO {
            format!(
                "Get {}% discount on orders over {}",
                format_percent(self.percentage),
                format_amount(self.minimum_amount)
            )
        } else {
            format!(
                "Get {}% discount on your entire order",
                format_percent(self.percentage)
            )
        }
    }
}
