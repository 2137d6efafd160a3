use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The order endpoint refused the order. `message` is the server's own
    /// message when the body carried one, otherwise a status-based fallback.
    #[error("{message}")]
    OrderRejected { status: u16, message: String },

    /// The order endpoint answered 2xx without an `orderNumber`.
    #[error("order accepted by {url} but no order number was returned")]
    MissingOrderNumber { url: String },

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
