use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// A product plus the quantity the shopper intends to buy.
///
/// Serialized flat (product fields next to `quantity`), which is also the
/// shape of the persisted cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.unit_price() * Decimal::from(self.quantity)
    }
}

/// Ordered cart lines, at most one per product id, every quantity >= 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from untrusted lines (e.g. persisted state), dropping
    /// zero quantities and merging duplicate ids into the first occurrence.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                tracing::debug!(id = %line.product.id, "dropping cart line with zero quantity");
                continue;
            }
            match cart.position(&line.product.id) {
                Some(idx) => {
                    tracing::debug!(id = %line.product.id, "merging duplicate cart line");
                    let existing = &mut cart.lines[idx];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == id)
    }

    /// Adds one unit of `product`, appending a new line if needed.
    ///
    /// Returns the resulting quantity of that line.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(idx) = self.position(&product.id) {
            let line = &mut self.lines[idx];
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
            1
        }
    }

    /// Overwrites the quantity of `id`. A quantity below 1 removes the line.
    ///
    /// Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.position(id) {
            Some(idx) if self.lines[idx].quantity != quantity => {
                self.lines[idx].quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes the line for `id`. Returns `true` if a line was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over all lines, missing prices as zero.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities, i.e. the number shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
