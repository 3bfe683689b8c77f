//! Purchase history grouped by calendar day.

use chrono::{Days, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::Purchase;

/// Purchases made on one day, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub purchases: Vec<Purchase>,
}

impl DayGroup {
    pub fn total(&self) -> f64 {
        self.purchases.iter().map(|p| p.amount).sum()
    }
}

/// Group purchases by their day in `tz`. Days are ordered newest first.
pub fn group_by_day<Tz: TimeZone>(purchases: &[Purchase], tz: &Tz) -> Vec<DayGroup> {
    let mut days: BTreeMap<NaiveDate, Vec<Purchase>> = BTreeMap::new();
    for purchase in purchases {
        let date = purchase.timestamp.with_timezone(tz).date_naive();
        days.entry(date).or_default().push(purchase.clone());
    }

    days.into_iter()
        .rev()
        .map(|(date, mut purchases)| {
            purchases.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            DayGroup { date, purchases }
        })
        .collect()
}

/// Section header for `date`: `"Today"`, `"Yesterday"`, or e.g. `"Monday, Jan 5"`.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(date) {
        "Yesterday".to_string()
    } else {
        date.format("%A, %b %-d").to_string()
    }
}
