use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::ConfigError;

/// Largest number of fractional digits a `Decimal` can carry.
const MAX_PRICE_DECIMALS: u32 = 28;

/// Weekday name (`"monday"` … `"sunday"`) → opening interval for that day.
pub type OpeningHours = BTreeMap<String, OpeningInterval>;

/// Opening and closing time of day, as `"HH:MM"` strings exactly as served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningInterval {
    pub start: String,
    pub end: String,
}

impl OpeningInterval {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// A pickup location the customer chooses before submitting an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionOption {
    pub id: i64,
    pub address: String,
    /// Map link shown next to the address, e.g. a Google Maps short link.
    #[serde(rename = "locationURL", default)]
    pub location_url: Option<String>,
}

/// Style tokens carried through from the shop configuration. Opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub header_text: String,
    pub header_background: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "bg-black text-white".to_string(),
            secondary: "bg-gray-200 text-gray-800".to_string(),
            accent: "bg-yellow-400 text-gray-900".to_string(),
            background: "bg-gray-100".to_string(),
            text: "text-gray-900".to_string(),
            header_text: "text-white".to_string(),
            header_background: "bg-gray-900".to_string(),
        }
    }
}

/// Shop configuration served as `configuration.json`.
///
/// Every field is always present: anything missing from the served document
/// takes the value of the embedded default configuration ([`ShopConfig::default`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct ShopConfig {
    pub shop_name: String,
    pub shop_icon: String,
    /// Location of the product catalog JSON array.
    pub shop_products_url: String,
    /// Outbound contact number the order message is sent to.
    pub whatsapp_phone: String,
    pub currency_sign: String,
    pub price_decimals: u32,
    /// Tax rate as a percentage, e.g. `10` for 10 %.
    pub tax_percentage: Decimal,
    pub colors: Colors,
    pub collection_options: Vec<CollectionOption>,
    /// Language code, e.g. `"es"`. Unknown codes fall back to English.
    pub language: String,
    pub opening_hours: OpeningHours,
}

impl Default for ShopConfig {
    fn default() -> Self {
        let opening_hours = [
            ("monday", "09:00", "22:00"),
            ("tuesday", "00:00", "22:00"),
            ("wednesday", "09:00", "23:00"),
            ("thursday", "00:00", "22:00"),
            ("friday", "09:00", "23:00"),
            ("saturday", "10:00", "23:00"),
            ("sunday", "10:00", "21:00"),
        ]
        .into_iter()
        .map(|(day, start, end)| (day.to_string(), OpeningInterval::new(start, end)))
        .collect();

        Self {
            shop_name: "Foodie".to_string(),
            shop_icon: "https://creativeclub.ie/foodie_icon.svg".to_string(),
            shop_products_url: "https://creativeclub.ie/bambino/products.json".to_string(),
            whatsapp_phone: "353830297520".to_string(),
            currency_sign: "$".to_string(),
            price_decimals: 2,
            tax_percentage: Decimal::TEN,
            colors: Colors::default(),
            collection_options: vec![
                CollectionOption {
                    id: 1,
                    address: "37 Stephen Street Lower - Dublin, D02 T862".to_string(),
                    location_url: Some("https://maps.app.goo.gl/qCPACXYW9pFXtmSi8".to_string()),
                },
                CollectionOption {
                    id: 2,
                    address: "18 Merrion St Upper - Dublin 2, D02 X064".to_string(),
                    location_url: Some("https://maps.app.goo.gl/qCPACXYW9pFXtmSi8".to_string()),
                },
            ],
            language: "es".to_string(),
            opening_hours,
        }
    }
}

impl ShopConfig {
    #[must_use]
    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    /// Finds a collection option by the string form of its numeric id.
    ///
    /// Selections arrive from the presentation layer as strings (`"2"`), so the
    /// comparison is made against `id.to_string()` rather than by parsing.
    #[must_use]
    pub fn collection_option(&self, selected: &str) -> Option<&CollectionOption> {
        self.collection_options
            .iter()
            .find(|option| option.id.to_string() == selected)
    }

    /// Checks the invariants the order formatter relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a negative tax rate, an
    /// unrepresentable decimal precision, an empty products URL, or duplicate
    /// collection option ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_percentage < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "TAX_PERCENTAGE must be non-negative, got {}",
                self.tax_percentage
            )));
        }

        if self.price_decimals > MAX_PRICE_DECIMALS {
            return Err(ConfigError::Validation(format!(
                "PRICE_DECIMALS must be at most {MAX_PRICE_DECIMALS}, got {}",
                self.price_decimals
            )));
        }

        if self.shop_products_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "SHOP_PRODUCTS_URL must be non-empty".to_string(),
            ));
        }

        let mut seen_ids = HashSet::new();
        for option in &self.collection_options {
            if !seen_ids.insert(option.id) {
                return Err(ConfigError::Validation(format!(
                    "duplicate collection option id: {}",
                    option.id
                )));
            }
        }

        Ok(())
    }
}

/// Load and validate a shop configuration from a local YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_shop_config_file(path: &Path) -> Result<ShopConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ShopFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: ShopConfig = serde_yaml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}
