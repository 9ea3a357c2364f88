mod config;
mod menu;
mod order;
mod shop;
mod status;
mod ticker;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::ConfigCommands;
use crate::order::OrderArgs;

#[derive(Debug, Parser)]
#[command(name = "foodie")]
#[command(about = "Storefront menu, ordering and shop configuration")]
struct Cli {
    /// Named shop to load from the configuration host (defaults to the embedded shop)
    #[arg(long, global = true, env = "FOODIE_SHOP")]
    shop: Option<String>,

    /// Storefront page URL carrying a `?shop=` parameter
    #[arg(long, global = true, conflicts_with = "shop")]
    page_url: Option<String>,

    /// Local YAML or JSON shop configuration used in place of the embedded default
    #[arg(long, global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the menu, optionally for a single category
    Menu {
        #[arg(long)]
        category: Option<String>,
    },
    /// Build an order and print its dispatch link
    Order(OrderArgs),
    /// Show whether the shop is open, optionally re-checking on a timer
    Status {
        #[arg(long)]
        watch: bool,
    },
    /// Inspect or edit the shop configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = foodie_core::load_app_settings()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("foodie: run `foodie --help` for available commands");
        return Ok(());
    };

    let request = shop::ShopRequest {
        shop: cli.shop.as_deref(),
        page_url: cli.page_url.as_deref(),
        config_file: cli.config_file.as_deref(),
    };

    match command {
        Commands::Menu { category } => {
            let session = shop::load_session(&settings, &request).await?;
            menu::run_menu(&session, category.as_deref())?;
        }
        Commands::Order(args) => {
            let mut session = shop::load_session(&settings, &request).await?;
            order::run_order(&mut session, &args)?;
        }
        Commands::Status { watch } => {
            let mut session = shop::load_session(&settings, &request).await?;
            status::run_status(&mut session, watch, &settings).await?;
        }
        Commands::Config { command } => {
            let config = shop::load_config(&settings, &request).await?;
            config::run_config(config, &command)?;
        }
    }

    Ok(())
}
