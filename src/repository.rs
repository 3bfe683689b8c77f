//! The data-access seam between the view state and the backend.

use crate::error::Result;
use crate::models::{Insight, Purchase, Timeframe};

/// Source of purchases and insights.
///
/// [`ApiClient`](crate::client::ApiClient) is the HTTP implementation; tests
/// and offline tools can provide their own.
pub trait PurchaseRepository {
    /// Fetch every stored purchase, in server order.
    fn fetch_purchases(&self) -> Result<Vec<Purchase>>;

    /// Store a new purchase.
    fn save_purchase(&self, purchase: &Purchase) -> Result<()>;

    /// Fetch AI-generated insights for `timeframe`.
    fn fetch_insights(&self, timeframe: Timeframe) -> Result<Vec<Insight>>;
}

impl<R: PurchaseRepository + ?Sized> PurchaseRepository for &R {
    fn fetch_purchases(&self) -> Result<Vec<Purchase>> {
        (**self).fetch_purchases()
    }

    fn save_purchase(&self, purchase: &Purchase) -> Result<()> {
        (**self).save_purchase(purchase)
    }

    fn fetch_insights(&self, timeframe: Timeframe) -> Result<Vec<Insight>> {
        (**self).fetch_insights(timeframe)
    }
}
