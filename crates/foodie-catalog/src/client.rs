use std::time::Duration;

use foodie_core::{validate_products, AppSettings, ProductItem, ShopConfig};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::source::ShopSource;

/// A shop ready to hand to the storefront session.
#[derive(Debug, Clone)]
pub struct LoadedShop {
    pub config: ShopConfig,
    pub products: Vec<ProductItem>,
}

/// HTTP client for shop configuration documents and product catalogs.
///
/// Non-2xx responses surface as typed errors. Nothing is retried: a failed
/// load is terminal for the attempt.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    default_config: ShopConfig,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout and `User-Agent`.
    ///
    /// `base_url` is the root that named shops are resolved under.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_config: ShopConfig::default(),
        })
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, CatalogError> {
        Self::new(
            &settings.config_base_url,
            settings.request_timeout_secs,
            &settings.user_agent,
        )
    }

    /// Replace the configuration used for [`ShopSource::Default`].
    #[must_use]
    pub fn with_default_config(mut self, config: ShopConfig) -> Self {
        self.default_config = config;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and validate a named shop's configuration document.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`CatalogError::Http`]: network or TLS failure.
    /// - [`CatalogError::Deserialize`]: body is not a configuration object.
    /// - [`CatalogError::Invalid`]: the configuration fails validation.
    pub async fn fetch_shop_config(&self, shop_name: &str) -> Result<ShopConfig, CatalogError> {
        let source = ShopSource::from_name(Some(shop_name))?;
        let Some(url) = source.config_url(&self.base_url) else {
            return Ok(self.default_config.clone());
        };

        let config: ShopConfig = self
            .get_json(&url, &format!("shop configuration for {shop_name}"))
            .await?;
        config.validate()?;
        Ok(config)
    }

    /// Fetch and validate the product catalog at `products_url`.
    ///
    /// # Errors
    ///
    /// Same variants as [`Self::fetch_shop_config`].
    pub async fn fetch_products(&self, products_url: &str) -> Result<Vec<ProductItem>, CatalogError> {
        let products: Vec<ProductItem> = self
            .get_json(products_url, &format!("product catalog from {products_url}"))
            .await?;
        validate_products(&products)?;
        Ok(products)
    }

    /// Load the configuration for `source`, then the catalog it names.
    ///
    /// The two requests run sequentially; the second depends on the first.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_shop_config`] or
    /// [`Self::fetch_products`].
    pub async fn load_shop(&self, source: &ShopSource) -> Result<LoadedShop, CatalogError> {
        let config = match source {
            ShopSource::Default => self.default_config.clone(),
            ShopSource::Named(name) => self.fetch_shop_config(name).await?,
        };

        let products = self.fetch_products(&config.shop_products_url).await?;

        tracing::info!(
            shop = source.label(),
            shop_name = %config.shop_name,
            products = products.len(),
            "shop loaded"
        );

        Ok(LoadedShop { config, products })
    }

    async fn get_json<T>(&self, url: &str, context: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(url, "fetching");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
