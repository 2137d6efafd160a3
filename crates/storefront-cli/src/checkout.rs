use clap::Args;
use storefront_core::{OrderForm, PaymentMethod, COUNTRIES, DEFAULT_COUNTRY};

use crate::FileStorefront;

/// Contact, shipping and payment details for `checkout`.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub postal_code: String,
    #[arg(long)]
    pub city: String,
    #[arg(long, default_value = DEFAULT_COUNTRY, value_parser = COUNTRIES)]
    pub country: String,
    /// ideal, creditcard, paypal or banktransfer
    #[arg(long, default_value = "ideal")]
    pub payment: PaymentMethod,
    /// Accept the terms and conditions and privacy policy
    #[arg(long)]
    pub accept_terms: bool,
}

impl CheckoutArgs {
    fn fill(self, form: &mut OrderForm) {
        form.first_name = self.first_name;
        form.last_name = self.last_name;
        form.email = self.email;
        form.phone = self.phone;
        form.address = self.address;
        form.postal_code = self.postal_code;
        form.city = self.city;
        form.country = self.country;
        form.payment_method = self.payment;
        form.terms_accepted = self.accept_terms;
    }
}

/// Submit an order for the saved cart.
///
/// # Errors
///
/// Returns an error if validation fails or the backend does not accept the
/// order; the saved cart is left untouched in both cases.
pub(crate) async fn run_checkout(
    store: &mut FileStorefront,
    args: CheckoutArgs,
) -> anyhow::Result<()> {
    store.begin_checkout()?;
    args.fill(store.form_mut());

    let confirmation = store.submit_order().await?;
    println!("order placed: {}", confirmation.order_number);
    println!("items: {}", confirmation.cart_items);
    println!("a confirmation will be sent to {}", confirmation.email);
    Ok(())
}
