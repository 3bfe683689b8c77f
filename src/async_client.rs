//! Async wrapper around [`NudgeSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! blocking `reqwest` client must never be created or dropped on an async
//! worker thread, so construction happens on the pool as well.
//!
//! # Example
//!
//! ```no_run
//! use nudge_sdk::{AsyncNudgeSdk, Timeframe};
//!
//! # async fn example() -> nudge_sdk::Result<()> {
//! let sdk = AsyncNudgeSdk::builder().build().await?;
//!
//! let purchases = sdk.purchases().await?;
//! let insights = sdk.insights(Timeframe::Month).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone};

use crate::analytics::SpendingSummary;
use crate::error::{NudgeError, Result};
use crate::models::{Insight, Purchase, Timeframe};
use crate::NudgeSdk;

// ---------------------------------------------------------------------------
// AsyncNudgeSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncNudgeSdk`] instance.
#[derive(Default)]
pub struct AsyncNudgeSdkBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    monthly_budget: Option<f64>,
}

impl AsyncNudgeSdkBuilder {
    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the monthly budget used by [`AsyncNudgeSdk::summary`].
    pub fn monthly_budget(mut self, budget: f64) -> Self {
        self.monthly_budget = Some(budget);
        self
    }

    /// Build the async SDK on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncNudgeSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = NudgeSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(budget) = self.monthly_budget {
                builder = builder.monthly_budget(budget);
            }
            let sdk = builder.build()?;
            Ok(AsyncNudgeSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| NudgeError::Task(format!("join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncNudgeSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`NudgeSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. Each call completes its request before
/// returning, so callers always receive a full purchase snapshot.
pub struct AsyncNudgeSdk {
    inner: Arc<Mutex<NudgeSdk>>,
}

impl AsyncNudgeSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncNudgeSdkBuilder {
        AsyncNudgeSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&NudgeSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| NudgeError::Task("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| NudgeError::Task(format!("join error: {e}")))?
    }

    /// Fetch all purchases.
    pub async fn purchases(&self) -> Result<Vec<Purchase>> {
        self.run(|s| s.purchases().list()).await
    }

    /// Store a new purchase.
    pub async fn save_purchase(&self, purchase: Purchase) -> Result<()> {
        self.run(move |s| s.purchases().save(&purchase)).await
    }

    /// Fetch insights for `timeframe`.
    pub async fn insights(&self, timeframe: Timeframe) -> Result<Vec<Insight>> {
        self.run(move |s| s.insights().for_timeframe(timeframe)).await
    }

    /// Fetch purchases and aggregate them for `timeframe`.
    pub async fn summary<Tz>(
        &self,
        timeframe: Timeframe,
        now: DateTime<Tz>,
    ) -> Result<SpendingSummary>
    where
        Tz: TimeZone + Send + 'static,
        Tz::Offset: Send + 'static,
    {
        self.run(move |s| s.summary(timeframe, &now)).await
    }

    /// Close the SDK, releasing the HTTP client on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| NudgeError::Task(format!("join error: {e}")))
    }
}
