//! Catalog listing commands.

use storefront_app::CatalogStatus;
use storefront_core::{format_price, CategoryFilter, Product, SortKey};

use crate::FileStorefront;

const TITLE_WIDTH: usize = 32;

/// Loads the catalog, turning a failure into the user-facing message.
pub(crate) async fn load(store: &mut FileStorefront) -> anyhow::Result<usize> {
    match store.load_catalog().await {
        Ok(count) => Ok(count),
        Err(e) => {
            let message = match store.catalog().status() {
                CatalogStatus::Failed(message) => message.clone(),
                _ => e.to_string(),
            };
            Err(anyhow::anyhow!("{message} ({e})"))
        }
    }
}

/// List the derived catalog view.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub(crate) async fn run_products(
    store: &mut FileStorefront,
    category: Option<&str>,
    search: Option<&str>,
    sort: SortKey,
) -> anyhow::Result<()> {
    load(store).await?;

    let catalog = store.catalog_mut();
    if let Some(category) = category {
        let Ok(filter) = category.parse::<CategoryFilter>();
        catalog.set_category(filter);
    }
    if let Some(search) = search {
        catalog.set_search(search);
    }
    catalog.set_sort(sort);

    print_products(store.catalog().view());
    Ok(())
}

/// List categories with their product counts.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub(crate) async fn run_categories(store: &mut FileStorefront) -> anyhow::Result<()> {
    load(store).await?;
    print_categories(store);
    Ok(())
}

pub(crate) fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("no products match the current filters");
        return;
    }

    println!("{:<38}{:<34}{:<18}PRICE", "ID", "TITLE", "CATEGORY");
    for product in products {
        println!(
            "{:<38}{:<34}{:<18}{}",
            product.id,
            truncate(&product.title, TITLE_WIDTH),
            truncate(&product.category, 16),
            format_price(product.price)
        );
    }
}

pub(crate) fn print_categories(store: &FileStorefront) {
    let catalog = store.catalog();
    println!("{:<24}PRODUCTS", "CATEGORY");
    println!("{:<24}{}", CategoryFilter::All.to_string(), catalog.products().len());
    for (name, count) in catalog.category_counts() {
        println!("{name:<24}{count}");
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        format!("{}...", value.chars().take(width - 3).collect::<String>())
    } else {
        value.to_string()
    }
}
