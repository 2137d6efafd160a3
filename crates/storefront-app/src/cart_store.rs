use rust_decimal::Decimal;
use storefront_core::{Cart, CartLine, Product};

use crate::storage::CartStorage;

/// Storage key of the persisted cart.
pub const CART_KEY: &str = "cart";

/// The shopper's cart, mirrored to durable storage after every mutation.
///
/// Storage is read once in [`CartStore::open`]. Unreadable or corrupt state
/// yields an empty cart; write failures are logged and the in-memory cart
/// stays authoritative.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Restores the cart from `storage`, falling back to an empty cart.
    pub fn open(storage: S) -> Self {
        let cart = restore(&storage);
        tracing::debug!(lines = cart.lines().len(), "cart restored");
        Self { cart, storage }
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Adds one unit of `product` and returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        let quantity = self.cart.add(product);
        self.persist();
        quantity
    }

    /// Sets the quantity of `id`; below 1 removes the line.
    ///
    /// Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        let changed = self.cart.set_quantity(id, quantity);
        self.persist();
        changed
    }

    /// Returns `true` if a line was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.cart.remove(id);
        self.persist();
        removed
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(self.cart.lines()) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode cart");
                return;
            }
        };
        if let Err(e) = self.storage.save(CART_KEY, &encoded) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

fn restore<S: CartStorage>(storage: &S) -> Cart {
    let raw = match storage.load(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read saved cart; starting empty");
            return Cart::new();
        }
    };

    match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => Cart::from_lines(lines),
        Err(e) => {
            tracing::warn!(error = %e, "saved cart is not valid; starting empty");
            Cart::new()
        }
    }
}
