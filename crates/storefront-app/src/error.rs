use std::path::PathBuf;

use storefront_client::ClientError;
use storefront_core::FormField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an order was not placed.
///
/// The first four variants are raised before any request is sent.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("you must accept the terms and conditions and privacy policy")]
    TermsNotAccepted,

    #[error("required field {0} is empty")]
    MissingField(FormField),

    #[error("\"{0}\" is not a valid e-mail address")]
    InvalidEmail(String),

    #[error("the cart is empty")]
    EmptyCart,

    #[error("an order is already being submitted")]
    InFlight,

    #[error("order could not be placed: {0}")]
    Submit(#[from] ClientError),
}

impl OrderError {
    /// `true` for failures caught locally, before contacting the backend.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrderError::TermsNotAccepted
                | OrderError::MissingField(_)
                | OrderError::InvalidEmail(_)
                | OrderError::EmptyCart
        )
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no product with id {0} in the catalog")]
    UnknownProduct(String),
}
