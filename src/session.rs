//! View state behind the insights and transactions screens.
//!
//! [`InsightsSession`] owns the latest purchase snapshot and the summary
//! derived from it. Every reload fetches a complete snapshot before
//! recomputing, and a failed fetch leaves the previous snapshot, insights and
//! summary in place; only [`error_message`](InsightsSession::error_message)
//! changes.

use chrono::{DateTime, TimeZone};

use crate::analytics::{self, SpendingSummary};
use crate::config;
use crate::error::Result;
use crate::history::{self, DayGroup};
use crate::models::{Insight, Purchase, Timeframe};
use crate::repository::PurchaseRepository;

pub struct InsightsSession<R> {
    repo: R,
    purchases: Vec<Purchase>,
    insights: Vec<Insight>,
    timeframe: Timeframe,
    budget: f64,
    summary: Option<SpendingSummary>,
    error_message: Option<String>,
}

impl<R: PurchaseRepository> InsightsSession<R> {
    /// Create an empty session using the default monthly budget. Nothing is
    /// fetched until [`reload`](Self::reload) is called.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            purchases: Vec::new(),
            insights: Vec::new(),
            timeframe: Timeframe::default(),
            budget: config::DEFAULT_MONTHLY_BUDGET,
            summary: None,
            error_message: None,
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget.max(0.0);
        self
    }

    // -- Accessors ---------------------------------------------------------

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Summary of the last successful aggregation, if any.
    pub fn summary(&self) -> Option<&SpendingSummary> {
        self.summary.as_ref()
    }

    /// User-facing description of the last failure, cleared on a successful reload.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Purchases grouped by day, newest first, for the transactions list.
    pub fn history<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DayGroup> {
        history::group_by_day(&self.purchases, tz)
    }

    // -- Operations --------------------------------------------------------

    /// Fetch purchases and insights, then recompute the summary.
    pub fn reload<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<()> {
        self.error_message = None;

        let purchases = match self.repo.fetch_purchases() {
            Ok(purchases) => purchases,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load purchases");
                self.error_message = Some(format!("Failed to load data: {}", e));
                return Err(e);
            }
        };
        self.purchases = purchases;

        // Already logged and stored in `error_message`; analytics still run.
        self.refresh_insights().ok();
        self.recompute(now);
        Ok(())
    }

    /// Refetch insights for the selected timeframe. The previous insights are
    /// kept if the request fails.
    pub fn refresh_insights(&mut self) -> Result<()> {
        match self.repo.fetch_insights(self.timeframe) {
            Ok(insights) => {
                self.insights = insights;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, timeframe = %self.timeframe, "failed to load insights");
                self.error_message = Some(format!("Failed to load insights: {}", e));
                Err(e)
            }
        }
    }

    /// Switch timeframe, refetch its insights and recompute the summary.
    pub fn select_timeframe<Tz: TimeZone>(&mut self, timeframe: Timeframe, now: &DateTime<Tz>) {
        self.timeframe = timeframe;
        // Already logged and stored in `error_message`.
        self.refresh_insights().ok();
        self.recompute(now);
    }

    /// Change the monthly budget and recompute the budget figures.
    pub fn set_budget<Tz: TimeZone>(&mut self, budget: f64, now: &DateTime<Tz>) {
        self.budget = budget.max(0.0);
        self.recompute(now);
    }

    /// Save a purchase, then reload so the summary includes it.
    pub fn add_purchase<Tz: TimeZone>(
        &mut self,
        purchase: &Purchase,
        now: &DateTime<Tz>,
    ) -> Result<()> {
        if let Err(e) = self.repo.save_purchase(purchase) {
            tracing::warn!(error = %e, id = %purchase.id, "failed to save purchase");
            self.error_message = Some(format!("Failed to save purchase: {}", e));
            return Err(e);
        }
        self.reload(now)
    }

    fn recompute<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        self.summary = Some(analytics::summarize(
            &self.purchases,
            self.timeframe,
            now,
            self.budget,
        ));
    }
}
