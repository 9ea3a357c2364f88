//! Shop resolution and session start-up shared by every command.

use std::path::Path;

use foodie_catalog::{CatalogClient, CatalogError, ShopSource};
use foodie_core::{load_shop_config_file, AppSettings, LoadStatus, ShopConfig, ShopSession};

/// Global flags that decide which shop a command works on.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShopRequest<'a> {
    pub shop: Option<&'a str>,
    pub page_url: Option<&'a str>,
    pub config_file: Option<&'a Path>,
}

impl ShopRequest<'_> {
    pub(crate) fn source(&self) -> Result<ShopSource, CatalogError> {
        match self.page_url {
            Some(page_url) => ShopSource::from_page_url(page_url),
            None => ShopSource::from_name(self.shop),
        }
    }

    /// Configuration used for the default shop: `--config-file` when given,
    /// otherwise the embedded one.
    pub(crate) fn default_config(&self) -> anyhow::Result<ShopConfig> {
        match self.config_file {
            Some(path) => {
                let config = load_shop_config_file(path)?;
                tracing::info!(path = %path.display(), shop_name = %config.shop_name, "loaded shop config file");
                Ok(config)
            }
            None => Ok(ShopConfig::default()),
        }
    }
}

/// Fetch the shop and build a ready session.
///
/// A failed fetch marks the session as failed and surfaces the generic
/// load notice; nothing is retried.
///
/// # Errors
///
/// Returns an error if the request flags are invalid or either fetch fails.
pub(crate) async fn load_session(
    settings: &AppSettings,
    request: &ShopRequest<'_>,
) -> anyhow::Result<ShopSession> {
    let source = request.source()?;
    let default_config = request.default_config()?;
    let client = CatalogClient::from_settings(settings)?.with_default_config(default_config.clone());

    let mut session = ShopSession::new(default_config);
    match client.load_shop(&source).await {
        Ok(loaded) => {
            session.apply_config(loaded.config);
            session.load_catalog(loaded.products);
        }
        Err(e) => {
            tracing::error!(shop = source.label(), error = %e, "failed to load shop data");
            session.fail_load();
        }
    }

    if let LoadStatus::Failed(notice) = session.status() {
        anyhow::bail!("{notice}");
    }
    Ok(session)
}

/// Resolve the shop configuration without fetching the catalog.
///
/// # Errors
///
/// Returns an error if the request flags are invalid or the configuration
/// fetch fails.
pub(crate) async fn load_config(
    settings: &AppSettings,
    request: &ShopRequest<'_>,
) -> anyhow::Result<ShopConfig> {
    match request.source()? {
        ShopSource::Default => request.default_config(),
        ShopSource::Named(name) => {
            let client = CatalogClient::from_settings(settings)?;
            Ok(client.fetch_shop_config(&name).await?)
        }
    }
}
