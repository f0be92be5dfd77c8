//! Rule Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    catalog::{
        CatalogError,
        amounts::{AmountConfig, amount_or},
    },
    discounts::{
        BuyOneGetOneDiscount, Discount, FixedAmountDiscount, NoDiscount, PercentageDiscount,
    },
};

/// Discount rule configuration from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    /// No discount
    None,

    /// Percentage off the order
    Percentage {
        /// Percentage, 0-100
        percentage: AmountConfig,

        /// Minimum subtotal, 0 when omitted
        #[serde(default)]
        minimum_amount: Option<AmountConfig>,
    },

    /// Fixed amount off the order
    FixedAmount {
        /// Amount taken off
        discount_amount: AmountConfig,

        /// Minimum subtotal, 0 when omitted
        #[serde(default)]
        minimum_purchase: Option<AmountConfig>,
    },

    /// Buy one, get one
    BuyOneGetOne {
        /// Category filter, all categories when omitted
        #[serde(default)]
        target_category: Option<String>,

        /// Discount on the second item, 100 when omitted
        #[serde(default)]
        discount_percentage: Option<AmountConfig>,
    },
}

impl TryFrom<RuleConfig> for Discount {
    type Error = CatalogError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        let discount = match config {
            RuleConfig::None => Discount::None(NoDiscount),
            RuleConfig::Percentage {
                percentage,
                minimum_amount,
            } => Discount::Percentage(PercentageDiscount::new(
                percentage.try_into()?,
                amount_or(minimum_amount, Decimal::ZERO)?,
            )?),
            RuleConfig::FixedAmount {
                discount_amount,
                minimum_purchase,
            } => Discount::FixedAmount(FixedAmountDiscount::new(
                discount_amount.try_into()?,
                amount_or(minimum_purchase, Decimal::ZERO)?,
            )?),
            RuleConfig::BuyOneGetOne {
                target_category,
                discount_percentage,
            } => Discount::BuyOneGetOne(BuyOneGetOneDiscount::new(
                target_category,
                amount_or(discount_percentage, Decimal::ONE_HUNDRED)?,
            )?),
        };

        Ok(discount)
    }
}
