//! Saved-cart commands.

use clap::Subcommand;
use storefront_core::{format_price, Cart};

use crate::FileStorefront;

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Show cart lines and the total
    Show,
    /// Add one unit of a product
    Add {
        /// Product id as listed by `products`
        id: String,
    },
    /// Set the quantity of a line; 0 or less removes it
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove { id: String },
    /// Empty the cart
    Clear,
}

/// Run one `cart` sub-command against the saved cart.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched (for `add`) or the
/// product id is unknown.
pub(crate) async fn run_cart(
    store: &mut FileStorefront,
    command: CartCommands,
) -> anyhow::Result<()> {
    match command {
        CartCommands::Show => {}
        CartCommands::Add { id } => {
            crate::catalog::load(store).await?;
            let quantity = store.add_to_cart(&id)?;
            println!("added {id} (now {quantity} in cart)");
        }
        CartCommands::Set { id, quantity } => {
            if !store.set_quantity(&id, quantity) && store.cart().cart().get(&id).is_none() {
                println!("{id} is not in the cart");
            }
        }
        CartCommands::Remove { id } => {
            if !store.remove_from_cart(&id) {
                println!("{id} is not in the cart");
            }
        }
        CartCommands::Clear => store.clear_cart(),
    }

    print_cart(store.cart().cart());
    Ok(())
}

pub(crate) fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    println!("{:<38}{:<34}{:>5}{:>14}", "ID", "TITLE", "QTY", "SUBTOTAL");
    for line in cart.lines() {
        println!(
            "{:<38}{:<34}{:>5}{:>14}",
            line.product.id,
            line.product.title,
            line.quantity,
            format_price(Some(line.subtotal()))
        );
    }
    println!(
        "{} item(s), total {}",
        cart.item_count(),
        format_price(Some(cart.total()))
    );
}
