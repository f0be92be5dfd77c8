//! Catalog
//!
//! Preconfigured discount rules and sample products, described in YAML.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{products::ProductConfig, rules::RuleConfig},
    discounts::{Discount, DiscountError},
    items::{ItemError, LineItem},
};

pub mod amounts;
pub mod products;
pub mod rules;

const BUILTIN_CATALOG_YAML: &str = include_str!("../../catalog/default.yml");

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// An amount could not be represented as a decimal
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A rule had invalid parameters
    #[error("Invalid rule: {0}")]
    Rule(#[from] DiscountError),

    /// A product had invalid fields
    #[error("Invalid product: {0}")]
    Item(#[from] ItemError),

    /// No rule at the requested position
    #[error("Rule not found: {0}")]
    RuleNotFound(usize),

    /// No product with the requested name
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Wrapper for a catalog document
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Discount rules, in display order
    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    /// Products that can be added to a cart
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

/// Validated rules and products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rules: Vec<Discount>,
    products: Vec<LineItem>,
}

impl Catalog {
    /// Create a catalog from already validated rules and products.
    pub fn new(rules: Vec<Discount>, products: Vec<LineItem>) -> Self {
        Self { rules, products }
    }

    /// The catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG_YAML)
    }

    /// Parse and validate a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or any rule or product is invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(yaml)?;

        let rules = file
            .rules
            .into_iter()
            .map(Discount::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let products = file
            .products
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rules = rules.len(), products = products.len(), "catalog loaded");

        Ok(Self { rules, products })
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        debug!(path = %path.display(), "reading catalog");

        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// All rules, in display order
    pub fn rules(&self) -> &[Discount] {
        &self.rules
    }

    /// All products
    pub fn products(&self) -> &[LineItem] {
        &self.products
    }

    /// Get a rule by position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RuleNotFound`] if there is no rule at `index`.
    pub fn rule(&self, index: usize) -> Result<&Discount, CatalogError> {
        self.rules
            .get(index)
            .ok_or(CatalogError::RuleNotFound(index))
    }

    /// Get a product by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product has that name.
    pub fn product(&self, name: &str) -> Result<&LineItem, CatalogError> {
        self.products
            .iter()
            .find(|product| product.name() == name)
            .ok_or_else(|| CatalogError::ProductNotFound(name.to_string()))
    }
}
