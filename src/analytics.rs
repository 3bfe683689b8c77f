//! Spending analytics over an in-memory purchase snapshot.
//!
//! Every function here is pure: the caller supplies the purchases, the
//! timeframe and the reference instant `now`. Day bucketing happens in the
//! time zone carried by `now`, so passing `Local::now()` buckets by the
//! device's local calendar while tests can pin a fixed offset.

use chrono::{DateTime, Days, Months, NaiveDate, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Category, Purchase, Timeframe};

/// Maximum number of entries returned by [`top_categories`].
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Budget fraction at which [`BudgetStatus::NearLimit`] starts.
pub const NEAR_LIMIT_THRESHOLD: f64 = 0.9;

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Total spent on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySpending {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Total spent in one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: Category,
    pub amount: f64,
}

impl CategorySpending {
    /// Fraction of `total` spent in this category, 0 when nothing was spent.
    pub fn share(&self, total: f64) -> f64 {
        if total.is_nan() || total <= 0.0 {
            return 0.0;
        }
        self.amount / total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= NEAR_LIMIT_THRESHOLD {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::OnTrack
        }
    }
}

/// Everything the insights dashboard renders for one timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub timeframe: Timeframe,
    pub total_spent: f64,
    pub daily: Vec<DaySpending>,
    /// Sum of the daily series; can be lower than `total_spent`.
    pub series_total: f64,
    pub average_daily: f64,
    pub top_categories: Vec<CategorySpending>,
    pub top_category: Option<Category>,
    /// Purchases in the whole snapshot, not just the window.
    pub purchase_count: usize,
    pub budget: f64,
    pub budget_percentage: f64,
    pub budget_remaining: f64,
    pub budget_status: BudgetStatus,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Earliest instant included in `timeframe` as seen from `now`.
///
/// Week subtracts seven calendar days; month and year subtract calendar
/// months, clipping to the end of shorter months (Mar 31 -> Feb 28/29). The
/// shift happens on the wall clock of `now`. A shifted time that falls in a
/// DST fold takes the earlier reading, and one that falls in a DST gap keeps
/// the UTC offset of `now`. Returns `None` only when the subtraction leaves
/// chrono's date range.
pub fn cutoff<Tz: TimeZone>(timeframe: Timeframe, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    let local = now.naive_local();
    let shifted = match timeframe {
        Timeframe::Week => local.checked_sub_days(Days::new(7)),
        Timeframe::Month => local.checked_sub_months(Months::new(1)),
        Timeframe::Year => local.checked_sub_months(Months::new(12)),
    }?;

    match now.timezone().from_local_datetime(&shifted).earliest() {
        Some(dt) => Some(dt.with_timezone(&Utc)),
        None => now
            .offset()
            .fix()
            .from_local_datetime(&shifted)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Purchases at or after the timeframe cutoff. Future-dated purchases are kept.
pub fn filter_by_timeframe<Tz: TimeZone>(
    purchases: &[Purchase],
    timeframe: Timeframe,
    now: &DateTime<Tz>,
) -> Vec<Purchase> {
    match cutoff(timeframe, now) {
        Some(cutoff) => purchases
            .iter()
            .filter(|p| p.timestamp >= cutoff)
            .cloned()
            .collect(),
        // Nothing predates a cutoff outside chrono's range.
        None => purchases.to_vec(),
    }
}

pub fn total_spent(purchases: &[Purchase]) -> f64 {
    purchases.iter().map(|p| p.amount).sum()
}

/// One entry per day for the last `timeframe.bucket_count()` days ending
/// today, ascending by date, zero-filled.
///
/// Purchases whose day has no bucket are left out of the series but are still
/// part of [`total_spent`]. For month and year windows the calendar cutoff can
/// reach further back than the fixed bucket count.
pub fn daily_series<Tz: TimeZone>(
    purchases: &[Purchase],
    timeframe: Timeframe,
    now: &DateTime<Tz>,
) -> Vec<DaySpending> {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut buckets: BTreeMap<NaiveDate, f64> = (0..timeframe.bucket_count() as u64)
        .filter_map(|i| today.checked_sub_days(Days::new(i)))
        .map(|date| (date, 0.0))
        .collect();

    let mut dropped = 0usize;
    for purchase in purchases {
        let day = purchase.timestamp.with_timezone(&tz).date_naive();
        match buckets.get_mut(&day) {
            Some(amount) => *amount += purchase.amount,
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::trace!(dropped, %timeframe, "purchases outside the daily series");
    }

    buckets
        .into_iter()
        .map(|(date, amount)| DaySpending { date, amount })
        .collect()
}

/// Sum of a daily series.
pub fn series_total(series: &[DaySpending]) -> f64 {
    series.iter().map(|d| d.amount).sum()
}

/// Mean spend per bucket of a daily series, 0 for an empty series.
pub fn average_daily(series: &[DaySpending]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series_total(series) / series.len() as f64
}

/// Up to five categories by total spend, highest first.
///
/// Equal totals keep the order in which the categories were first seen.
pub fn top_categories(purchases: &[Purchase]) -> Vec<CategorySpending> {
    let mut totals: Vec<CategorySpending> = Vec::new();
    for purchase in purchases {
        match totals.iter_mut().find(|t| t.category == purchase.category) {
            Some(total) => total.amount += purchase.amount,
            None => totals.push(CategorySpending {
                category: purchase.category,
                amount: purchase.amount,
            }),
        }
    }

    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals.truncate(TOP_CATEGORY_LIMIT);
    totals
}

/// Fraction of `budget` consumed, in `[0, 1]`. Zero when there is no budget.
pub fn budget_percentage(total: f64, budget: f64) -> f64 {
    if budget.is_nan() || budget <= 0.0 {
        return 0.0;
    }
    (total / budget).clamp(0.0, 1.0)
}

pub fn budget_remaining(total: f64, budget: f64) -> f64 {
    (budget - total).max(0.0)
}

/// Run the whole pipeline for one timeframe.
pub fn summarize<Tz: TimeZone>(
    purchases: &[Purchase],
    timeframe: Timeframe,
    now: &DateTime<Tz>,
    budget: f64,
) -> SpendingSummary {
    let filtered = filter_by_timeframe(purchases, timeframe, now);
    let total = total_spent(&filtered);
    let percentage = budget_percentage(total, budget);
    let daily = daily_series(&filtered, timeframe, now);
    let top = top_categories(&filtered);

    SpendingSummary {
        timeframe,
        total_spent: total,
        series_total: series_total(&daily),
        average_daily: average_daily(&daily),
        daily,
        top_category: top.first().map(|c| c.category),
        top_categories: top,
        purchase_count: purchases.len(),
        budget,
        budget_percentage: percentage,
        budget_remaining: budget_remaining(total, budget),
        budget_status: BudgetStatus::from_percentage(percentage),
    }
}
