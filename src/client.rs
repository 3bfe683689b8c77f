//! Blocking HTTP client for the Nudge backend.
//!
//! Wraps a `reqwest` blocking client bound to one base URL. Every call is a
//! single request: no retries, no caching. Non-success statuses and malformed
//! bodies surface as [`NudgeError`] variants.

use chrono::{Local, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config;
use crate::error::{NudgeError, Result};
use crate::models::{Insight, InsightsEnvelope, Purchase, PurchaseRecord, Timeframe};
use crate::repository::PurchaseRepository;

/// HTTP client bound to a single backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5001`).
    ///
    /// Fails with [`NudgeError::InvalidUrl`] if the URL does not parse or
    /// cannot carry a path.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut raw = base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)
            .map_err(|e| NudgeError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(NudgeError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| NudgeError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send()?;
        let resp = expect_status("GET", &url, resp, StatusCode::OK)?;
        let body = resp.text()?;
        if body.trim().is_empty() {
            return Err(NudgeError::InvalidResponse(format!(
                "empty body from {}",
                url
            )));
        }
        serde_json::from_str(&body).map_err(NudgeError::Decode)
    }
}

fn expect_status(
    method: &'static str,
    url: &Url,
    resp: Response,
    expected: StatusCode,
) -> Result<Response> {
    let status = resp.status();
    if status != expected {
        tracing::warn!(%url, status = status.as_u16(), "unexpected response status");
        return Err(NudgeError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            expected: expected.as_u16(),
        });
    }
    Ok(resp)
}

impl PurchaseRepository for ApiClient {
    fn fetch_purchases(&self) -> Result<Vec<Purchase>> {
        let url = self.endpoint(config::TRANSACTIONS_PATH)?;
        let records: Vec<PurchaseRecord> = self.get_json(url)?;
        let now = Utc::now();
        let purchases: Vec<Purchase> = records
            .into_iter()
            .map(|r| r.into_purchase(&Local, now))
            .collect();
        tracing::debug!(count = purchases.len(), "fetched purchases");
        Ok(purchases)
    }

    fn save_purchase(&self, purchase: &Purchase) -> Result<()> {
        let url = self.endpoint(config::TRANSACTIONS_PATH)?;
        let body = serde_json::to_vec(&purchase.to_request()).map_err(NudgeError::Encode)?;

        tracing::debug!(%url, id = %purchase.id, "POST");
        let resp = self
            .client
            .post(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        expect_status("POST", &url, resp, StatusCode::CREATED)?;
        Ok(())
    }

    fn fetch_insights(&self, timeframe: Timeframe) -> Result<Vec<Insight>> {
        let mut url = self.endpoint(config::INSIGHTS_PATH)?;
        url.query_pairs_mut()
            .append_pair("timeframe", timeframe.query_value());
        let envelope: InsightsEnvelope = self.get_json(url)?;
        Ok(envelope.insights)
    }
}
