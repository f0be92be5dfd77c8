//! Product Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    catalog::{CatalogError, amounts::AmountConfig},
    items::LineItem,
};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductConfig {
    /// Product name
    pub name: String,

    /// Unit price (e.g., `24.99`)
    pub price: AmountConfig,

    /// Product category
    pub category: String,

    /// Quantity, 1 when omitted
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl TryFrom<ProductConfig> for LineItem {
    type Error = CatalogError;

    fn try_from(config: ProductConfig) -> Result<Self, Self::Error> {
        let price = Decimal::try_from(config.price)?;

        Ok(LineItem::new(
            config.name,
            price,
            config.category,
            config.quantity,
        )?)
    }
}
