//! Pure catalog view derivation: category filter, text search and sort.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::products::Product;
use crate::CoreError;

/// Which category the view is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Named(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Named(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Incoming (backend) order.
    #[default]
    Featured,
    Newest,
    PriceLow,
    PriceHigh,
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "newest" => Ok(SortKey::Newest),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            other => Err(CoreError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        };
        f.write_str(name)
    }
}

/// The user-controlled inputs of the product view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortKey,
}

/// Derives the visible product list.
///
/// Filters by category, then by a case-insensitive substring match on title
/// or summary (skipped when `search` is empty), then sorts. `Featured` keeps
/// the incoming order; the other keys use a stable sort so ties keep it too.
/// Products without a price sort as zero; products without a timestamp sort
/// last under `Newest`.
#[must_use]
pub fn derive_view(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| query.category.matches(p))
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.summary.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    match query.sort {
        SortKey::Featured => {}
        SortKey::PriceLow => view.sort_by_key(Product::unit_price),
        SortKey::PriceHigh => view.sort_by(|a, b| b.unit_price().cmp(&a.unit_price())),
        SortKey::Newest => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    view
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

/// Product count per category, in [`categories`] order.
#[must_use]
pub fn category_counts(products: &[Product]) -> Vec<(String, usize)> {
    categories(products)
        .into_iter()
        .map(|category| {
            let count = products.iter().filter(|p| p.category == category).count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
