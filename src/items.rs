//! Items

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::pricing::format_amount;

/// Errors raised while constructing a line item.
#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    /// The unit price was below zero.
    #[error("price cannot be negative, got {0}")]
    NegativePrice(Decimal),

    /// The quantity was zero.
    #[error("quantity must be positive")]
    ZeroQuantity,

    /// The name was empty.
    #[error("item name cannot be empty")]
    BlankName,
}

/// A named, priced and categorised cart entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LineItem {
    name: String,
    unit_price: Decimal,
    category: String,
    quantity: u32,
}

impl LineItem {
    /// Creates a new line item.
    ///
    /// # Errors
    ///
    /// - [`ItemError::NegativePrice`]: `unit_price` is below zero.
    /// - [`ItemError::ZeroQuantity`]: `quantity` is zero.
    /// - [`ItemError::BlankName`]: `name` is empty.
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        category: impl Into<String>,
        quantity: u32,
    ) -> Result<Self, ItemError> {
        let name = name.into();
        let category = category.into();

        if unit_price < Decimal::ZERO {
            return Err(ItemError::NegativePrice(unit_price));
        }

        if quantity == 0 {
            return Err(ItemError::ZeroQuantity);
        }

        if name.is_empty() {
            return Err(ItemError::BlankName);
        }

        Ok(Self {
            name,
            unit_price,
            category,
            quantity,
        })
    }

    /// Creates a line item with a quantity of one.
    ///
    /// # Errors
    ///
    /// See [`LineItem::new`].
    pub fn single(
        name: impl Into<String>,
        unit_price: Decimal,
        category: impl Into<String>,
    ) -> Result<Self, ItemError> {
        Self::new(name, unit_price, category, 1)
    }

    /// Returns the item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of a single unit
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the item category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} x {} = {}",
            self.name,
            self.category,
            format_amount(self.unit_price),
            self.quantity,
            format_amount(self.line_total())
        )
    }
}
