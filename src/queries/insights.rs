//! Insight queries against `/insights`.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Insight, Timeframe};
use crate::repository::PurchaseRepository;

/// Query interface for AI-generated spending insights.
pub struct InsightQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> InsightQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Insights computed by the backend over `timeframe`.
    pub fn for_timeframe(&self, timeframe: Timeframe) -> Result<Vec<Insight>> {
        self.client.fetch_insights(timeframe)
    }
}
