use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::checkout::OrderConfirmation;
use crate::notify::Transient;

/// Payload of the "added to cart" toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToCart {
    pub title: String,
    pub quantity: u32,
}

/// Which panels are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewToggles {
    pub cart_open: bool,
    pub checkout_open: bool,
}

/// Toast, success modal and panel visibility.
///
/// The success modal's expiry closes the checkout panel and marks the order
/// form for reset, so both are shared with its timer task.
#[derive(Debug)]
pub struct UiState {
    added: Transient<AddedToCart>,
    success: Transient<OrderConfirmation>,
    views: Arc<Mutex<ViewToggles>>,
    form_reset: Arc<AtomicBool>,
}

impl UiState {
    #[must_use]
    pub fn new(toast: Duration, success: Duration) -> Self {
        Self {
            added: Transient::new(toast),
            success: Transient::new(success),
            views: Arc::new(Mutex::new(ViewToggles::default())),
            form_reset: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn notify_added(&mut self, title: impl Into<String>, quantity: u32) {
        self.added.show(AddedToCart {
            title: title.into(),
            quantity,
        });
    }

    #[must_use]
    pub fn added(&self) -> Option<AddedToCart> {
        self.added.current()
    }

    pub fn dismiss_added(&mut self) {
        self.added.close();
    }

    /// Opens the success modal. On expiry it closes itself and the checkout
    /// and marks the order form for reset.
    pub fn show_success(&mut self, confirmation: OrderConfirmation) {
        let views = Arc::clone(&self.views);
        let form_reset = Arc::clone(&self.form_reset);
        self.success.show_with(confirmation, move || {
            views
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .checkout_open = false;
            form_reset.store(true, Ordering::Release);
        });
    }

    #[must_use]
    pub fn success(&self) -> Option<OrderConfirmation> {
        self.success.current()
    }

    /// Closes the success modal early, with the same effect as its expiry.
    pub fn close_success(&mut self) {
        if self.success.close().is_some() {
            self.update_views(|v| v.checkout_open = false);
            self.form_reset.store(true, Ordering::Release);
        }
    }

    /// Whether the success modal has gone away since the form was last reset.
    #[must_use]
    pub fn form_reset_pending(&self) -> bool {
        self.form_reset.load(Ordering::Acquire)
    }

    /// Clears the pending reset, returning whether one was set.
    pub fn take_form_reset(&mut self) -> bool {
        self.form_reset.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn views(&self) -> ViewToggles {
        *self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn open_cart(&mut self) {
        self.update_views(|v| v.cart_open = true);
    }

    pub fn close_cart(&mut self) {
        self.update_views(|v| v.cart_open = false);
    }

    pub fn toggle_cart(&mut self) {
        self.update_views(|v| v.cart_open = !v.cart_open);
    }

    /// Opening the checkout closes the cart panel.
    pub fn open_checkout(&mut self) {
        self.update_views(|v| {
            v.cart_open = false;
            v.checkout_open = true;
        });
    }

    pub fn close_checkout(&mut self) {
        self.update_views(|v| v.checkout_open = false);
    }

    fn update_views(&self, f: impl FnOnce(&mut ViewToggles)) {
        f(&mut self.views.lock().unwrap_or_else(PoisonError::into_inner));
    }
}
