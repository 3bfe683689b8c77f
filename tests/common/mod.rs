//! Shared test fixtures for the Nudge SDK integration tests.
//!
//! Provides purchase builders pinned to a fixed `now`, an in-memory
//! [`StubRepository`], and `serve_once()`, a one-shot local HTTP responder for
//! exercising [`ApiClient`](nudge_sdk::ApiClient) without a real backend.

#![allow(dead_code)]

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc,
};
use nudge_sdk::{Category, Insight, NudgeError, Purchase, PurchaseRepository, Result, Timeframe};
use std::cell::{Cell, RefCell};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

// ---------------------------------------------------------------------------
// Purchases
// ---------------------------------------------------------------------------

/// Reference instant used across tests: 2025-06-15 12:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

pub fn purchase(amount: f64, category: Category, timestamp: DateTime<Utc>) -> Purchase {
    Purchase::new(amount, category, timestamp)
}

/// The three-purchase week scenario: two shopping trips inside the week and a
/// transport purchase ten days back.
pub fn week_scenario(now: DateTime<Utc>) -> Vec<Purchase> {
    vec![
        purchase(50.0, Category::Shopping, now),
        purchase(30.0, Category::Shopping, days_ago(now, 2)),
        purchase(20.0, Category::Transport, days_ago(now, 10)),
    ]
}

pub fn sample_insights() -> Vec<Insight> {
    vec![Insight {
        insight: "Shopping is your largest category this week.".into(),
        tip: "Try a 48-hour wait before non-essential purchases.".into(),
    }]
}

// ---------------------------------------------------------------------------
// DST time zone
// ---------------------------------------------------------------------------

/// US Eastern time with the 2025 transitions only: UTC-5, and UTC-4 from
/// 2025-03-09 07:00 UTC until 2025-11-02 06:00 UTC.
#[derive(Debug, Clone, Copy)]
pub struct Eastern2025;

impl Eastern2025 {
    fn standard() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn daylight() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600).unwrap()
    }

    fn utc_at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }
}

fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).unwrap()
}

impl TimeZone for Eastern2025 {
    type Offset = FixedOffset;

    fn from_offset(_: &FixedOffset) -> Self {
        Eastern2025
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(midnight()))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        // Daylight first: it maps to the earlier instant.
        let valid: Vec<FixedOffset> = [Self::daylight(), Self::standard()]
            .into_iter()
            .filter(|offset| {
                let utc = *local - Duration::seconds(offset.local_minus_utc() as i64);
                self.offset_from_utc_datetime(&utc) == *offset
            })
            .collect();
        match valid.as_slice() {
            [single] => LocalResult::Single(*single),
            [earliest, latest] => LocalResult::Ambiguous(*earliest, *latest),
            _ => LocalResult::None,
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(midnight()))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc >= Self::utc_at(3, 9, 7) && *utc < Self::utc_at(11, 2, 6) {
            Self::daylight()
        } else {
            Self::standard()
        }
    }
}

// ---------------------------------------------------------------------------
// StubRepository
// ---------------------------------------------------------------------------

/// In-memory repository with switchable failures.
#[derive(Default)]
pub struct StubRepository {
    pub purchases: RefCell<Vec<Purchase>>,
    pub insights: RefCell<Vec<Insight>>,
    pub fail_fetch: Cell<bool>,
    pub fail_insights: Cell<bool>,
    pub fail_save: Cell<bool>,
    pub insight_requests: RefCell<Vec<Timeframe>>,
}

impl StubRepository {
    pub fn with_purchases(purchases: Vec<Purchase>) -> Self {
        Self {
            purchases: RefCell::new(purchases),
            insights: RefCell::new(sample_insights()),
            ..Default::default()
        }
    }
}

fn server_error(method: &'static str, path: &str, expected: u16) -> NudgeError {
    NudgeError::Status {
        method,
        url: format!("stub://{}", path),
        status: 500,
        expected,
    }
}

impl PurchaseRepository for StubRepository {
    fn fetch_purchases(&self) -> Result<Vec<Purchase>> {
        if self.fail_fetch.get() {
            return Err(server_error("GET", "transactions", 200));
        }
        Ok(self.purchases.borrow().clone())
    }

    fn save_purchase(&self, purchase: &Purchase) -> Result<()> {
        if self.fail_save.get() {
            return Err(server_error("POST", "transactions", 201));
        }
        self.purchases.borrow_mut().push(purchase.clone());
        Ok(())
    }

    fn fetch_insights(&self, timeframe: Timeframe) -> Result<Vec<Insight>> {
        self.insight_requests.borrow_mut().push(timeframe);
        if self.fail_insights.get() {
            return Err(server_error("GET", "insights", 200));
        }
        Ok(self.insights.borrow().clone())
    }
}

// ---------------------------------------------------------------------------
// One-shot HTTP responder
// ---------------------------------------------------------------------------

/// Accept a single connection on a random local port, answer it with
/// `status` (e.g. `"200 OK"`) and `body`, and hand back the raw request.
///
/// Returns `(base_url, handle)`; join the handle after the client call to
/// inspect what was sent.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base_url, handle)
}

/// Read headers plus a `Content-Length` body.
fn read_request(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Body portion of a raw HTTP request.
pub fn request_body(request: &str) -> &str {
    request
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .unwrap_or("")
}
