pub mod client;
pub mod error;
pub mod types;

pub use client::StorefrontClient;
pub use error::ClientError;
pub use types::OrderReceipt;
