use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";
pub const BASE_URL_ENV: &str = "NUDGE_API_URL";

pub const TRANSACTIONS_PATH: &str = "transactions";
pub const INSIGHTS_PATH: &str = "insights";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MONTHLY_BUDGET: f64 = 5000.0;

/// Base URL of the backend, taken from `NUDGE_API_URL` when set and non-empty.
pub fn default_base_url() -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
