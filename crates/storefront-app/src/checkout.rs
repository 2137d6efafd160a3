//! Order validation and submission.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use storefront_client::StorefrontClient;
use storefront_core::{Cart, OrderForm, OrderSubmission};

use crate::error::OrderError;

/// What the success modal shows after the backend accepts an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub email: String,
    pub cart_items: String,
}

/// Validates checkout input and sends at most one order at a time.
///
/// Clones share the in-flight flag.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    client: StorefrontClient,
    in_flight: Arc<AtomicBool>,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl OrderComposer {
    #[must_use]
    pub fn new(client: StorefrontClient) -> Self {
        Self {
            client,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Checks, in order: terms accepted, required fields present, e-mail
    /// shape, non-empty cart.
    ///
    /// # Errors
    ///
    /// Returns the first [`OrderError`] validation variant that applies.
    pub fn validate(cart: &Cart, form: &OrderForm) -> Result<(), OrderError> {
        if !form.terms_accepted {
            return Err(OrderError::TermsNotAccepted);
        }
        if let Some(field) = form.first_missing_field() {
            return Err(OrderError::MissingField(field));
        }
        if !looks_like_email(form.email.trim()) {
            return Err(OrderError::InvalidEmail(form.email.clone()));
        }
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(())
    }

    /// Validates and sends the order.
    ///
    /// Nothing is sent when validation fails or another submission from this
    /// composer is still pending. The caller's cart and form are untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation [`OrderError`], [`OrderError::InFlight`], or
    /// [`OrderError::Submit`] wrapping the backend failure.
    pub async fn submit(
        &self,
        cart: &Cart,
        form: &OrderForm,
    ) -> Result<OrderConfirmation, OrderError> {
        Self::validate(cart, form)?;

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!("order submission already in flight");
            return Err(OrderError::InFlight);
        };

        let submission = OrderSubmission::from_cart(cart, form);
        tracing::info!(
            lines = cart.lines().len(),
            total = %submission.order_total,
            payment_method = %submission.payment_method,
            "submitting order"
        );

        let receipt = match self.client.create_order(&submission).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::error!(error = %e, "order submission failed");
                return Err(e.into());
            }
        };

        tracing::info!(order_number = %receipt.order_number, "order placed");
        Ok(OrderConfirmation {
            order_number: receipt.order_number,
            email: submission.email,
            cart_items: submission.cart_items,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(' ')
        }
        None => false,
    }
}
