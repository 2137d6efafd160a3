//! Response shapes of the order endpoint.
//!
//! ### `orderNumber`
//! Usually a string (`"ORD-2024-0042"`), but numeric ids have been seen from
//! backends that expose the database key directly. Both are accepted and
//! rendered as a string; `null`, absent or empty values are treated as
//! missing.
//!
//! ### Error bodies
//! Non-2xx responses may carry `{"message": "..."}`. Anything else (HTML
//! error pages, empty bodies) is ignored in favour of a status-based message.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderResponse {
    #[serde(default)]
    pub order_number: Option<Value>,
}

impl CreateOrderResponse {
    pub(crate) fn order_number(&self) -> Option<String> {
        match self.order_number.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// What the backend confirmed for a created order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_number: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> CreateOrderResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn string_order_number() {
        let r = parse(json!({ "orderNumber": "ORD-1" }));
        assert_eq!(r.order_number().as_deref(), Some("ORD-1"));
    }

    #[test]
    fn numeric_order_number_is_stringified() {
        let r = parse(json!({ "orderNumber": 42 }));
        assert_eq!(r.order_number().as_deref(), Some("42"));
    }

    #[test]
    fn blank_null_or_absent_order_number_is_missing() {
        assert!(parse(json!({ "orderNumber": "  " })).order_number().is_none());
        assert!(parse(json!({ "orderNumber": null })).order_number().is_none());
        assert!(parse(json!({ "id": 7 })).order_number().is_none());
    }

    #[test]
    fn error_body_message_is_optional() {
        let with: ApiErrorBody = serde_json::from_value(json!({ "message": "nope" })).unwrap();
        assert_eq!(with.message.as_deref(), Some("nope"));
        let without: ApiErrorBody = serde_json::from_value(json!({ "error": "x" })).unwrap();
        assert!(without.message.is_none());
    }
}
