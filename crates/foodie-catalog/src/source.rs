//! Which shop a storefront session loads.

use crate::error::CatalogError;

/// Query parameter on the storefront page URL that names the shop.
pub const SHOP_QUERY_PARAM: &str = "shop";

/// Where the shop configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopSource {
    /// Embedded default configuration; only the product catalog is fetched.
    Default,
    /// `<base>/<name>/configuration.json`, then the catalog it names.
    Named(String),
}

impl ShopSource {
    /// Resolve the source from an optional shop name. A blank name means the
    /// default shop.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidShopUrl`] if the name is not a single
    /// URL path segment.
    pub fn from_name(name: Option<&str>) -> Result<Self, CatalogError> {
        match name.map(str::trim) {
            None | Some("") => Ok(Self::Default),
            Some(name) => {
                validate_shop_name(name)?;
                Ok(Self::Named(name.to_string()))
            }
        }
    }

    /// Resolve the source from the `shop` query parameter of a storefront
    /// page URL, e.g. `https://example.com/?shop=bambino`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidShopUrl`] if the page URL does not
    /// parse or the named shop is not a single path segment.
    pub fn from_page_url(page_url: &str) -> Result<Self, CatalogError> {
        let url = reqwest::Url::parse(page_url).map_err(|e| CatalogError::InvalidShopUrl {
            shop_url: page_url.to_string(),
            reason: e.to_string(),
        })?;

        let shop = url
            .query_pairs()
            .find(|(key, _)| key == SHOP_QUERY_PARAM)
            .map(|(_, value)| value.into_owned());

        Self::from_name(shop.as_deref())
    }

    /// Configuration document URL under `base_url`, or `None` for the
    /// embedded default.
    #[must_use]
    pub fn config_url(&self, base_url: &str) -> Option<String> {
        match self {
            Self::Default => None,
            Self::Named(name) => Some(format!(
                "{}/{name}/configuration.json",
                base_url.trim_end_matches('/')
            )),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Named(name) => name,
        }
    }
}

fn validate_shop_name(name: &str) -> Result<(), CatalogError> {
    let reason = if name == "." || name == ".." {
        Some("shop name cannot be a relative path segment")
    } else if name
        .chars()
        .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
    {
        Some("shop name must be a single URL path segment")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CatalogError::InvalidShopUrl {
            shop_url: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
