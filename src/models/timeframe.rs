use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Timeframe — User-selected analysis window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimeframeInfo {
    label: &'static str,
    query_value: &'static str,
    bucket_count: usize,
}

// Indexed by `Timeframe as usize`.
const TIMEFRAME_INFO: [TimeframeInfo; 3] = [
    TimeframeInfo { label: "Week", query_value: "week", bucket_count: 7 },
    TimeframeInfo { label: "Month", query_value: "month", bucket_count: 30 },
    TimeframeInfo { label: "Year", query_value: "year", bucket_count: 365 },
];

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];

    fn info(self) -> &'static TimeframeInfo {
        &TIMEFRAME_INFO[self as usize]
    }

    /// Display label (`"Week"`, `"Month"`, `"Year"`).
    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Value of the `timeframe` query parameter sent to the insights endpoint.
    pub fn query_value(self) -> &'static str {
        self.info().query_value
    }

    /// Number of day buckets in the daily spending series.
    ///
    /// Fixed at 7 / 30 / 365 regardless of the actual calendar length of the
    /// month or year window.
    pub fn bucket_count(self) -> usize {
        self.info().bucket_count
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
