mod cart;
mod catalog;
mod checkout;
mod shell;

use anyhow::Context;
use clap::{Parser, Subcommand};
use storefront_app::{FileStorage, Storefront, Timings};
use storefront_client::StorefrontClient;
use storefront_core::SortKey;
use tracing_subscriber::EnvFilter;

use crate::cart::CartCommands;
use crate::checkout::CheckoutArgs;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products in the catalog
    Products {
        /// Only show products in this category ("all" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text to look for in title and summary
        #[arg(long)]
        search: Option<String>,

        /// Sort order: featured, newest, price-low or price-high
        #[arg(long, default_value = "featured")]
        sort: SortKey,
    },
    /// List categories with product counts
    Categories,
    /// Inspect or change the saved cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
    /// Place an order for the saved cart
    Checkout(CheckoutArgs),
    /// Interactive session (default when no command is given)
    Shell,
}

type FileStorefront = Storefront<FileStorage>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = storefront_core::load_app_config().context("invalid configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = StorefrontClient::from_config(&config).context("failed to build API client")?;
    tracing::debug!(
        api = %client.base_url(),
        env = %config.env,
        data_dir = %config.data_dir.display(),
        "storefront configured"
    );
    let storage = FileStorage::new(&config.data_dir);
    let timings = Timings::from_config(&config);
    let mut store: FileStorefront = Storefront::new(client, storage, timings);

    match cli.command {
        Some(Commands::Products {
            category,
            search,
            sort,
        }) => {
            catalog::run_products(&mut store, category.as_deref(), search.as_deref(), sort).await
        }
        Some(Commands::Categories) => catalog::run_categories(&mut store).await,
        Some(Commands::Cart { command }) => cart::run_cart(&mut store, command).await,
        Some(Commands::Checkout(args)) => checkout::run_checkout(&mut store, args).await,
        Some(Commands::Shell) | None => shell::run_shell(&mut store).await,
    }
}

#[cfg(test)]
mod tests;
