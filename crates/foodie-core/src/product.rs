use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How a product card is rendered. Presentation only; the core never branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayOption {
    #[default]
    Base,
    Compact,
    NoImage,
}

/// One entry of the product catalog served at `SHOP_PRODUCTS_URL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    /// Unique within a catalog; also the cart key.
    pub id: String,
    pub name: String,
    /// Unit price in the shop's currency.
    pub price: Decimal,
    /// Grouping key for the menu filter.
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub calories: Option<u32>,
    /// Free-form text such as `"15 min"`.
    #[serde(default)]
    pub preparation_time: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub display_option: DisplayOption,
}

/// Reject catalogs the cart arithmetic cannot trust.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] on an empty or duplicate product id or a
/// negative unit price.
pub fn validate_products(items: &[ProductItem]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for item in items {
        if item.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty id",
                item.name
            )));
        }

        if !seen_ids.insert(item.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                item.id
            )));
        }

        if item.price < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "product '{}' has negative price {}",
                item.id, item.price
            )));
        }
    }

    Ok(())
}
