//! Product records as returned by `GET /product/all`.
//!
//! ## Observed shape
//!
//! ```json
//! {
//!   "uuid": "0b4c…",
//!   "title": "Lamp",
//!   "summary": "Warm white desk lamp",
//!   "category": "Verlichting",
//!   "price": 24.95,
//!   "imageUrl": "https://cdn.example.com/lamp.jpg",
//!   "createdAt": "2024-03-01T09:30:00"
//! }
//! ```
//!
//! `price` may be a JSON number, a decimal string, `null` or absent; absent
//! prices count as zero wherever arithmetic happens. `createdAt` comes from a
//! backend that does not always attach a zone offset, so both RFC 3339 and
//! zone-less timestamps are accepted (the latter read as UTC).

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier, unique across the catalog.
    #[serde(rename = "uuid")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub category: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// The product price, with an absent price counted as zero.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339, zone-less ISO-8601 (`2024-03-01T09:30:00[.fff]`) or
/// `null`. Unparsable strings become `None` instead of failing the whole
/// catalog.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
