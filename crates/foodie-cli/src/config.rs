//! `config` command: show, edit or reset a shop configuration.
//!
//! Edits go through the session's staged copy and are promoted with a save,
//! so the result is always a full configuration document.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use foodie_core::{ShopConfig, ShopSession};
use rust_decimal::Decimal;

/// Sub-commands available under `config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the active configuration as YAML
    Show,
    /// Change fields and print (or write) the saved configuration
    Set {
        #[arg(long)]
        shop_name: Option<String>,
        /// Tax rate as a percentage, e.g. 21.5
        #[arg(long)]
        tax: Option<Decimal>,
        #[arg(long)]
        currency: Option<String>,
        /// Language code (en, es)
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        decimals: Option<u32>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        products_url: Option<String>,
        /// Write the result to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restore the embedded default configuration
    Reset {
        /// Write the result to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// # Errors
///
/// Returns an error if the edited configuration is invalid or cannot be
/// written.
pub(crate) fn run_config(config: ShopConfig, command: &ConfigCommands) -> anyhow::Result<()> {
    let saved = edited_config(config, command)?;
    let output = match command {
        ConfigCommands::Show => None,
        ConfigCommands::Set { output, .. } | ConfigCommands::Reset { output } => output.as_deref(),
    };
    emit(&saved, output)
}

/// Apply `command` to `config` and return the resulting active configuration.
fn edited_config(config: ShopConfig, command: &ConfigCommands) -> anyhow::Result<ShopConfig> {
    let mut session = ShopSession::new(config);

    match command {
        ConfigCommands::Show => {}
        ConfigCommands::Set {
            shop_name,
            tax,
            currency,
            language,
            decimals,
            phone,
            products_url,
            output: _,
        } => {
            session.stage_config(|staged| {
                if let Some(name) = shop_name {
                    staged.shop_name.clone_from(name);
                }
                if let Some(tax) = tax {
                    staged.tax_percentage = *tax;
                }
                if let Some(currency) = currency {
                    staged.currency_sign.clone_from(currency);
                }
                if let Some(language) = language {
                    staged.language.clone_from(language);
                }
                if let Some(decimals) = decimals {
                    staged.price_decimals = *decimals;
                }
                if let Some(phone) = phone {
                    staged.whatsapp_phone.clone_from(phone);
                }
                if let Some(url) = products_url {
                    staged.shop_products_url.clone_from(url);
                }
            });
            session.staged_config().validate()?;
            session.save_config();
        }
        ConfigCommands::Reset { .. } => {
            session.reset_config();
            session.save_config();
        }
    }

    Ok(session.config().clone())
}

fn emit(config: &ShopConfig, output: Option<&Path>) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(config).context("failed to serialize shop configuration")?;
    match output {
        Some(path) => {
            std::fs::write(path, yaml)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "shop configuration written");
        }
        None => print!("{yaml}"),
    }
    Ok(())
}
