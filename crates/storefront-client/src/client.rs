//! HTTP client for the storefront backend.
//!
//! Two endpoints: `GET product/all` for the catalog and `POST order/create`
//! for checkout. Neither call is retried; a failed catalog load is retried
//! only when the user asks for a reload, and an order is never resent
//! automatically.

use std::time::Duration;

use reqwest::{Client, Url};
use storefront_core::{AppConfig, OrderSubmission, Product};

use crate::error::ClientError;
use crate::types::{ApiErrorBody, CreateOrderResponse, OrderReceipt};

const PRODUCTS_PATH: &str = "product/all";
const CREATE_ORDER_PATH: &str = "order/create";

/// Client for the storefront REST API.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: Url,
}

impl StorefrontClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// `timeout_secs = 0` disables the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: normalise_base_url(base_url)?,
        })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`StorefrontClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_host,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the full product catalog.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON product array.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint(PRODUCTS_PATH)?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let products =
            serde_json::from_str::<Vec<Product>>(&body).map_err(|e| ClientError::Deserialize {
                context: format!("product list from {url}"),
                source: e,
            })?;

        tracing::debug!(count = products.len(), %url, "fetched products");
        Ok(products)
    }

    /// Submits an order.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::OrderRejected`] on any non-2xx status, carrying the
    ///   body's `message` when present.
    /// - [`ClientError::Deserialize`] if a 2xx body is not JSON.
    /// - [`ClientError::MissingOrderNumber`] if a 2xx body has no order number.
    pub async fn create_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<OrderReceipt, ClientError> {
        let url = self.endpoint(CREATE_ORDER_PATH)?;
        let response = self
            .client
            .post(url.clone())
            .json(submission)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = rejection_message(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), %message, "order rejected");
            return Err(ClientError::OrderRejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = serde_json::from_str::<CreateOrderResponse>(&body).map_err(|e| {
            ClientError::Deserialize {
                context: format!("order response from {url}"),
                source: e,
            }
        })?;

        let order_number = parsed
            .order_number()
            .ok_or_else(|| ClientError::MissingOrderNumber {
                url: url.to_string(),
            })?;

        Ok(OrderReceipt { order_number })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Ensures the base URL ends with exactly one slash so relative joins append
/// to its path instead of replacing the last segment.
fn normalise_base_url(base_url: &str) -> Result<Url, ClientError> {
    let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: "URL cannot be used as a base".to_owned(),
        });
    }
    Ok(url)
}

/// The server's `message` if the body has one, else a generic status message.
fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
