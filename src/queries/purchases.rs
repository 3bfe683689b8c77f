//! Purchase queries against `/transactions`.

use chrono::{DateTime, TimeZone};

use crate::analytics;
use crate::client::ApiClient;
use crate::error::Result;
use crate::history::{self, DayGroup};
use crate::models::{Category, Purchase, Timeframe};
use crate::repository::PurchaseRepository;

// ---------------------------------------------------------------------------
// PurchaseQuery
// ---------------------------------------------------------------------------

/// Query interface for stored purchases.
pub struct PurchaseQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> PurchaseQuery<'a> {
    /// Create a new `PurchaseQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All purchases, in server order.
    pub fn list(&self) -> Result<Vec<Purchase>> {
        self.client.fetch_purchases()
    }

    /// Store a new purchase.
    pub fn save(&self, purchase: &Purchase) -> Result<()> {
        self.client.save_purchase(purchase)
    }

    /// Purchases inside `timeframe` as seen from `now`.
    pub fn in_timeframe<Tz: TimeZone>(
        &self,
        timeframe: Timeframe,
        now: &DateTime<Tz>,
    ) -> Result<Vec<Purchase>> {
        let purchases = self.list()?;
        Ok(analytics::filter_by_timeframe(&purchases, timeframe, now))
    }

    /// Purchases in one category.
    pub fn by_category(&self, category: Category) -> Result<Vec<Purchase>> {
        let mut purchases = self.list()?;
        purchases.retain(|p| p.category == category);
        Ok(purchases)
    }

    /// Purchases grouped by day in `tz`, newest day first.
    pub fn grouped_by_day<Tz: TimeZone>(&self, tz: &Tz) -> Result<Vec<DayGroup>> {
        let purchases = self.list()?;
        Ok(history::group_by_day(&purchases, tz))
    }
}
