//! Nudge SDK for Rust.
//!
//! Provides a client for the Nudge spending-tracker backend and the analytics
//! that turn a purchase history into dashboard figures: timeframe totals, a
//! per-day spending series, top categories and budget usage.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::Local;
//! use nudge_sdk::{NudgeSdk, Timeframe};
//!
//! let sdk = NudgeSdk::builder().build().unwrap();
//!
//! // Fetch purchases and aggregate the last week
//! let summary = sdk.summary(Timeframe::Week, &Local::now()).unwrap();
//! println!("spent {} this week", nudge_sdk::format::currency(summary.total_spent));
//!
//! // AI insights for the same window
//! let insights = sdk.insights().for_timeframe(Timeframe::Week).unwrap();
//! ```

pub mod analytics;
#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod queries;
pub mod repository;
pub mod session;

pub use analytics::{BudgetStatus, CategorySpending, DaySpending, SpendingSummary};
#[cfg(feature = "async")]
pub use async_client::AsyncNudgeSdk;
pub use client::ApiClient;
pub use error::{NudgeError, Result};
pub use models::{Category, Insight, Purchase, Timeframe};
pub use repository::PurchaseRepository;
pub use session::InsightsSession;

use chrono::{DateTime, TimeZone};
use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// NudgeSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`NudgeSdk`] instance.
///
/// Use [`NudgeSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](NudgeSdkBuilder::build) to create the SDK.
pub struct NudgeSdkBuilder {
    base_url: String,
    timeout: Duration,
    monthly_budget: f64,
}

impl Default for NudgeSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::default_base_url(),
            timeout: config::DEFAULT_TIMEOUT,
            monthly_budget: config::DEFAULT_MONTHLY_BUDGET,
        }
    }
}

impl NudgeSdkBuilder {
    /// Set the backend base URL.
    ///
    /// Defaults to `NUDGE_API_URL` if set, otherwise `http://localhost:5001`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the monthly budget used by [`NudgeSdk::summary`]. Negative values
    /// are treated as zero.
    pub fn monthly_budget(mut self, budget: f64) -> Self {
        self.monthly_budget = budget.max(0.0);
        self
    }

    /// Build the SDK. Validates the base URL but performs no requests.
    pub fn build(self) -> Result<NudgeSdk> {
        let client = ApiClient::new(&self.base_url, self.timeout)?;
        Ok(NudgeSdk {
            client,
            monthly_budget: self.monthly_budget,
        })
    }
}

// ---------------------------------------------------------------------------
// NudgeSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Nudge SDK.
///
/// Owns an [`ApiClient`] and exposes query interfaces as lightweight
/// borrowing wrappers. Created via [`NudgeSdk::builder()`].
pub struct NudgeSdk {
    client: ApiClient,
    monthly_budget: f64,
}

impl NudgeSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> NudgeSdkBuilder {
        NudgeSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the purchase query interface.
    pub fn purchases(&self) -> queries::PurchaseQuery<'_> {
        queries::PurchaseQuery::new(&self.client)
    }

    /// Access the insight query interface.
    pub fn insights(&self) -> queries::InsightQuery<'_> {
        queries::InsightQuery::new(&self.client)
    }

    // -- Analytics ---------------------------------------------------------

    /// Fetch all purchases and aggregate them for `timeframe`.
    pub fn summary<Tz: TimeZone>(
        &self,
        timeframe: Timeframe,
        now: &DateTime<Tz>,
    ) -> Result<SpendingSummary> {
        let purchases = self.purchases().list()?;
        Ok(analytics::summarize(
            &purchases,
            timeframe,
            now,
            self.monthly_budget,
        ))
    }

    /// Start a view-state session backed by this SDK's client.
    pub fn session(&self) -> InsightsSession<&ApiClient> {
        InsightsSession::new(&self.client).with_budget(self.monthly_budget)
    }

    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }

    /// Return a reference to the underlying [`ApiClient`].
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for NudgeSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NudgeSdk(base_url={}, monthly_budget={})",
            self.client.base_url(),
            self.monthly_budget
        )
    }
}
