pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod money;
pub mod order;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartLine};
pub use catalog::{categories, category_counts, derive_view, CatalogQuery, CategoryFilter, SortKey};
pub use config::{load_app_config, load_app_config_from_env};
pub use money::{format_amount, format_price};
pub use order::{
    cart_summary, FormField, OrderForm, OrderSubmission, PaymentMethod, COUNTRIES,
    DEFAULT_COUNTRY,
};
pub use products::Product;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid sort key: {0} (expected featured, newest, price-low or price-high)")]
    InvalidSortKey(String),

    #[error("invalid payment method: {0} (expected ideal, creditcard, paypal or banktransfer)")]
    InvalidPaymentMethod(String),

    #[error("unknown form field: {0}")]
    UnknownFormField(String),
}
