//! Discounts
//!
//! Interchangeable rules that turn a list of line items into a discount amount.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::items::LineItem;

pub mod buy_one_get_one;
pub mod fixed_amount;
pub mod none;
pub mod percentage;

pub use buy_one_get_one::BuyOneGetOneDiscount;
pub use fixed_amount::FixedAmountDiscount;
pub use none::NoDiscount;
pub use percentage::PercentageDiscount;

/// Errors raised while constructing a discount rule.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// A percentage was outside `0..=100`.
    #[error("percentage must be between 0 and 100, got {0}")]
    PercentageOutOfRange(Decimal),

    /// A minimum spend threshold was below zero.
    #[error("minimum amount cannot be negative, got {0}")]
    NegativeMinimum(Decimal),

    /// A fixed discount amount was below zero.
    #[error("discount amount cannot be negative, got {0}")]
    NegativeAmount(Decimal),
}

/// A pricing rule that calculates a discount for a list of items.
///
/// Implementations must be pure: the same items always yield the same discount.
pub trait DiscountRule: fmt::Debug {
    /// Calculates the amount to subtract from the subtotal of `items`.
    fn compute_discount(&self, items: &[LineItem]) -> Decimal;

    /// Short display name, e.g. `"10% Off (Min $50.00)"`.
    fn name(&self) -> String;

    /// Sentence describing how the rule works.
    fn description(&self) -> String;
}

/// The closed set of built-in discount rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Discount {
    /// No discount
    None(NoDiscount),

    /// Percentage off the whole order
    Percentage(PercentageDiscount),

    /// Fixed amount off the whole order
    FixedAmount(FixedAmountDiscount),

    /// Buy one, get one free or discounted
    BuyOneGetOne(BuyOneGetOneDiscount),
}

impl Default for Discount {
    fn default() -> Self {
        Discount::None(NoDiscount)
    }
}

impl DiscountRule for Discount {
    fn compute_discount(&self, items: &[LineItem]) -> Decimal {
        match self {
            Discount::None(rule) => rule.compute_discount(items),
            Discount::Percentage(rule) => rule.compute_discount(items),
            Discount::FixedAmount(rule) => rule.compute_discount(items),
            Discount::BuyOneGetOne(rule) => rule.compute_discount(items),
        }
    }

    fn name(&self) -> String {
        match self {
            Discount::None(rule) => rule.name(),
            Discount::Percentage(rule) => rule.name(),
            Discount::FixedAmount(rule) => rule.name(),
            Discount::BuyOneGetOne(rule) => rule.name(),
        }
    }

    fn description(&self) -> String {
        match self {
            Discount::None(rule) => rule.description(),
            Discount::Percentage(rule) => rule.description(),
            Discount::FixedAmount(rule) => rule.description(),
            Discount::BuyOneGetOne(rule) => rule.description(),
        }
    }
}

impl From<NoDiscount> for Discount {
    fn from(rule: NoDiscount) -> Self {
        Discount::None(rule)
    }
}

impl From<PercentageDiscount> for Discount {
    fn from(rule: PercentageDiscount) -> Self {
        Discount::Percentage(rule)
    }
}

impl From<FixedAmountDiscount> for Discount {
    fn from(rule: FixedAmountDiscount) -> Self {
        Discount::FixedAmount(rule)
    }
}

impl From<BuyOneGetOneDiscount> for Discount {
    fn from(rule: BuyOneGetOneDiscount) -> Self {
        Discount::BuyOneGetOne(rule)
    }
}

/// Checks that a 0-100 percentage is in range.
pub(crate) fn validate_percentage(percentage: Decimal) -> Result<Decimal, DiscountError> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return Err(DiscountError::PercentageOutOfRange(percentage));
    }

    Ok(percentage)
}

/// Checks that a minimum spend threshold is not negative.
pub(crate) fn validate_minimum(minimum: Decimal) -> Result<Decimal, DiscountError> {
    if minimum < Decimal::ZERO {
        return Err(DiscountError::NegativeMinimum(minimum));
    }

    Ok(minimum)
}

/// Converts a 0-100 percentage into a fractional [`Percentage`].
pub(crate) fn to_percentage(percentage: Decimal) -> Percentage {
    Percentage::from(percentage / Decimal::ONE_HUNDRED)
}

/// Calculates `percentage` (0-100) of `amount`.
pub(crate) fn percent_of(percentage: Decimal, amount: Decimal) -> Decimal {
    to_percentage(percentage) * amount
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_items() -> Result<[LineItem; 2], crate::items::ItemError> {
        Ok([
            LineItem::new("Gaming Mouse", Decimal::new(49_99, 2), "Electronics", 3)?,
            LineItem::new("T-Shirt", Decimal::new(19_99, 2), "Clothing", 4)?,
        ])
    }

    #[test]
    fn enum_delegates_to_variant() -> TestResult {
        let items = test_items()?;
        let rule = PercentageDiscount::new(Decimal::TEN, Decimal::ZERO)?;
        let discount = Discount::from(rule.clone());

        assert_eq!(
            discount.compute_discount(&items),
            rule.compute_discount(&items)
        );
        assert_eq!(discount.name(), rule.name());
        assert_eq!(discount.description(), rule.description());

        Ok(())
    }

    #[test]
    fn default_is_no_discount() -> TestResult {
        let items = test_items()?;

        assert_eq!(Discount::default(), Discount::None(NoDiscount));
        assert_eq!(Discount::default().compute_discount(&items), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn bogo_variant_delegates() -> TestResult {
        let items = test_items()?;
        let discount = Discount::from(BuyOneGetOneDiscount::free_for_all());

        // 1 free mouse + 2 free shirts
        assert_eq!(discount.compute_discount(&items), Decimal::new(89_97, 2));
        assert_eq!(discount.name(), "Buy One Get One Free");

        Ok(())
    }

    #[test]
    fn fixed_variant_delegates() -> TestResult {
        let items = test_items()?;
        let discount = Discount::from(FixedAmountDiscount::new(Decimal::new(25, 0), Decimal::ZERO)?);

        assert_eq!(discount.compute_discount(&items), Decimal::new(25, 0));

        Ok(())
    }

    #[test]
    fn validate_percentage_bounds() {
        assert_eq!(validate_percentage(Decimal::ZERO), Ok(Decimal::ZERO));
        assert_eq!(
            validate_percentage(Decimal::ONE_HUNDRED),
            Ok(Decimal::ONE_HUNDRED)
        );
        assert_eq!(
            validate_percentage(Decimal::new(1001, 1)),
            Err(DiscountError::PercentageOutOfRange(Decimal::new(1001, 1)))
        );
        assert_eq!(
            validate_percentage(Decimal::NEGATIVE_ONE),
            Err(DiscountError::PercentageOutOfRange(Decimal::NEGATIVE_ONE))
        );
    }

    #[test]
    fn percent_of_is_exact() {
        assert_eq!(
            percent_of(Decimal::TEN, Decimal::new(1029_98, 2)),
            Decimal::new(102_998, 3)
        );
        assert_eq!(percent_of(Decimal::ZERO, Decimal::new(50, 0)), Decimal::ZERO);
    }
}
