use storefront_client::{ClientError, StorefrontClient};
use storefront_core::{
    categories, category_counts, derive_view, CatalogQuery, CategoryFilter, Product, SortKey,
};

/// Message shown when the catalog cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load products. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    /// User-facing error; the only way out is a full reload.
    Failed(String),
}

/// Fetched products plus the view derived from the current query.
///
/// The view is recomputed in full whenever the products or any part of the
/// query change.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<String>,
    query: CatalogQuery,
    view: Vec<Product>,
    status: CatalogStatus,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            query: CatalogQuery::default(),
            view: Vec::new(),
            status: CatalogStatus::Loading,
        }
    }

    /// Fetches the whole catalog and replaces the current product set.
    ///
    /// On failure the previous products are kept and the status becomes
    /// [`CatalogStatus::Failed`].
    ///
    /// # Errors
    ///
    /// Propagates the [`ClientError`] from the fetch.
    pub async fn load(&mut self, client: &StorefrontClient) -> Result<usize, ClientError> {
        self.status = CatalogStatus::Loading;
        match client.fetch_products().await {
            Ok(products) => {
                let count = products.len();
                self.replace_products(products);
                tracing::info!(
                    count,
                    categories = self.categories.len(),
                    "catalog loaded"
                );
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog");
                self.status = CatalogStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Installs a freshly fetched product set and marks the store ready.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.categories = categories(&products);
        self.products = products;
        self.status = CatalogStatus::Ready;
        self.refresh();
    }

    #[must_use]
    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        category_counts(&self.products)
    }

    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Products visible under the current query.
    #[must_use]
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
        self.refresh();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.refresh();
    }

    pub fn set_query(&mut self, query: CatalogQuery) {
        self.query = query;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = derive_view(&self.products, &self.query);
    }
}
