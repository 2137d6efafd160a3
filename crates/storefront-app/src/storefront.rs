use std::time::Duration;

use storefront_client::{ClientError, StorefrontClient};
use storefront_core::{AppConfig, OrderForm, Product};

use crate::cart_store::CartStore;
use crate::catalog_store::CatalogStore;
use crate::checkout::{OrderComposer, OrderConfirmation};
use crate::error::{OrderError, StoreError};
use crate::storage::CartStorage;
use crate::ui::UiState;

/// Lifetimes of the transient UI signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub toast: Duration,
    pub success: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast: Duration::from_secs(3),
            success: Duration::from_secs(5),
        }
    }
}

impl Timings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            toast: Duration::from_secs(config.notification_secs),
            success: Duration::from_secs(config.success_secs),
        }
    }
}

/// One shopper's session: catalog, persisted cart, checkout form and UI.
#[derive(Debug)]
pub struct Storefront<S> {
    client: StorefrontClient,
    catalog: CatalogStore,
    cart: CartStore<S>,
    form: OrderForm,
    blank_form: OrderForm,
    composer: OrderComposer,
    ui: UiState,
}

impl<S: CartStorage> Storefront<S> {
    /// Restores the cart from `storage`. The catalog starts empty; call
    /// [`Storefront::load_catalog`] to fetch it.
    pub fn new(client: StorefrontClient, storage: S, timings: Timings) -> Self {
        Self {
            composer: OrderComposer::new(client.clone()),
            client,
            catalog: CatalogStore::new(),
            cart: CartStore::open(storage),
            form: OrderForm::default(),
            blank_form: OrderForm::default(),
            ui: UiState::new(timings.toast, timings.success),
        }
    }

    /// Fetches the catalog. Also serves as the manual reload after a failure.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`]; the catalog status then carries the
    /// user-facing message.
    pub async fn load_catalog(&mut self) -> Result<usize, ClientError> {
        self.catalog.load(&self.client).await
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Adds one unit of the catalog product `id` and raises the toast.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if `id` is not in the catalog.
    pub fn add_to_cart(&mut self, id: &str) -> Result<u32, StoreError> {
        let product = self
            .catalog
            .find(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownProduct(id.to_string()))?;
        Ok(self.add_product(&product))
    }

    pub fn add_product(&mut self, product: &Product) -> u32 {
        let quantity = self.cart.add(product);
        tracing::debug!(id = %product.id, quantity, "added to cart");
        self.ui.notify_added(product.title.clone(), quantity);
        quantity
    }

    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        self.cart.set_quantity(id, quantity)
    }

    pub fn remove_from_cart(&mut self, id: &str) -> bool {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    /// The checkout form. Reads as blank once the success modal has expired
    /// or been closed, even if fields were edited while it was showing.
    #[must_use]
    pub fn form(&self) -> &OrderForm {
        if self.ui.form_reset_pending() {
            &self.blank_form
        } else {
            &self.form
        }
    }

    pub fn form_mut(&mut self) -> &mut OrderForm {
        self.apply_form_reset();
        &mut self.form
    }

    fn apply_form_reset(&mut self) {
        if self.ui.take_form_reset() {
            tracing::debug!("order form reset after confirmation");
            self.form.reset();
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.composer.is_submitting()
    }

    /// Opens the order form, closing the cart panel.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when there is nothing to check out.
    pub fn begin_checkout(&mut self) -> Result<(), OrderError> {
        if self.cart.cart().is_empty() {
            return Err(OrderError::EmptyCart);
        }
        self.apply_form_reset();
        self.ui.open_checkout();
        Ok(())
    }

    /// Closes the order form and discards what was entered.
    pub fn cancel_checkout(&mut self) {
        self.ui.close_checkout();
        self.ui.take_form_reset();
        self.form.reset();
    }

    /// Submits the current cart and form.
    ///
    /// On success the cart is cleared, the form reset and the success modal
    /// shown. On failure cart and form are left as they were.
    ///
    /// # Errors
    ///
    /// See [`OrderComposer::submit`].
    pub async fn submit_order(&mut self) -> Result<OrderConfirmation, OrderError> {
        self.apply_form_reset();
        let confirmation = self.composer.submit(self.cart.cart(), &self.form).await?;
        self.cart.clear();
        self.form.reset();
        self.ui.show_success(confirmation.clone());
        Ok(confirmation)
    }
}
