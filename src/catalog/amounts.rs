//! Amount Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::catalog::CatalogError;

/// A price or percentage written in YAML, either as a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountConfig {
    /// Plain YAML number (e.g., `24.99`)
    Number(f64),

    /// Quoted decimal (e.g., `"24.99"`)
    Text(String),
}

impl TryFrom<AmountConfig> for Decimal {
    type Error = CatalogError;

    fn try_from(config: AmountConfig) -> Result<Self, Self::Error> {
        // f64's Display is the shortest string that round-trips, so `24.99` stays `24.99`.
        let text = match config {
            AmountConfig::Number(value) if value.is_finite() => value.to_string(),
            AmountConfig::Number(value) => return Err(CatalogError::InvalidAmount(value.to_string())),
            AmountConfig::Text(text) => text,
        };

        Decimal::from_str(text.trim()).map_err(|_err| CatalogError::InvalidAmount(text))
    }
}

/// Converts an optional amount, using `default` when absent.
pub(crate) fn amount_or(
    config: Option<AmountConfig>,
    default: Decimal,
) -> Result<Decimal, CatalogError> {
    config.map_or(Ok(default), Decimal::try_from)
}
