use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

// ---------------------------------------------------------------------------
// Purchase — Immutable spending record
// ---------------------------------------------------------------------------

/// A single purchase. Amounts are non-negative USD values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub amount: f64,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
}

impl Purchase {
    /// Create a purchase with a freshly generated id.
    pub fn new<Tz: TimeZone>(amount: f64, category: Category, timestamp: DateTime<Tz>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            timestamp: timestamp.with_timezone(&Utc),
        }
    }

    /// Encode as the body of `POST /transactions`.
    pub fn to_request(&self) -> PurchaseRequest<'_> {
        PurchaseRequest {
            amount: self.amount,
            category: self.category.label(),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

// ---------------------------------------------------------------------------
// PurchaseRequest — Body of POST /transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRequest<'a> {
    pub amount: f64,
    pub category: &'a str,
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// PurchaseRecord — Row of GET /transactions
// ---------------------------------------------------------------------------

/// A purchase as returned by the server, before timestamp and category
/// normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub timestamp: String,
}

impl PurchaseRecord {
    /// Convert into a [`Purchase`].
    ///
    /// Timestamps without an offset are read as wall-clock time in `tz`.
    /// A timestamp that cannot be parsed is replaced by `fallback`, and an id
    /// that is not a UUID is replaced by a new one.
    pub fn into_purchase<Tz: TimeZone>(self, tz: &Tz, fallback: DateTime<Utc>) -> Purchase {
        let timestamp = parse_timestamp(&self.timestamp, tz).unwrap_or_else(|| {
            tracing::warn!(
                id = %self.id,
                timestamp = %self.timestamp,
                "unparseable purchase timestamp, using current time"
            );
            fallback
        });
        let id = Uuid::parse_str(&self.id).unwrap_or_else(|_| Uuid::new_v4());

        Purchase {
            id,
            amount: self.amount,
            category: Category::from_label(&self.category),
            timestamp,
        }
    }
}

/// Parse an ISO-8601 timestamp as sent by the backend.
///
/// Accepts RFC 3339 (with or without fractional seconds) and offset-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, which is interpreted in `tz`.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = raw.parse::<NaiveDateTime>().ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
