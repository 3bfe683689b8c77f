//! Smoke test against a running Nudge backend.
//!
//! Talks to `NUDGE_API_URL` (default `http://localhost:5001`), saves one
//! purchase, and exercises every public query and the analytics pipeline.
//!
//! Run with:
//! ```sh
//! cargo test --test smoke_test -- --ignored --nocapture
//! ```

use chrono::Local;
use nudge_sdk::{Category, NudgeSdk, Purchase, Timeframe};

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

struct Counters {
    pass: usize,
    fail: usize,
}

impl Counters {
    fn check(&mut self, label: &str, condition: bool, detail: &str) {
        let status = if condition { "PASS" } else { "FAIL" };
        if condition {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        if detail.is_empty() {
            eprintln!("  [{}] {}", status, label);
        } else {
            eprintln!("  [{}] {} -- {}", status, label, detail);
        }
    }
}

#[test]
#[ignore]
fn smoke_test() {
    let sdk = NudgeSdk::builder().build().unwrap();
    let mut c = Counters { pass: 0, fail: 0 };
    eprintln!("{}", sdk);

    section("Purchases");

    let before = sdk.purchases().list().unwrap();
    c.check("list", true, &format!("{} purchases", before.len()));

    let purchase = Purchase::new(4.5, Category::EatingOut, Local::now());
    let saved = sdk.purchases().save(&purchase);
    c.check("save", saved.is_ok(), &format!("{:?}", saved.err()));

    let after = sdk.purchases().list().unwrap();
    c.check(
        "list after save grows",
        after.len() == before.len() + 1,
        &format!("{} -> {}", before.len(), after.len()),
    );

    let eating_out = sdk.purchases().by_category(Category::EatingOut).unwrap();
    c.check("by_category", !eating_out.is_empty(), "");

    let groups = sdk.purchases().grouped_by_day(&Local).unwrap();
    c.check("grouped_by_day", !groups.is_empty(), &format!("{} days", groups.len()));

    for timeframe in Timeframe::ALL {
        section(&format!("Timeframe: {}", timeframe));
        let now = Local::now();

        let in_window = sdk.purchases().in_timeframe(timeframe, &now).unwrap();
        c.check("in_timeframe", !in_window.is_empty(), &format!("{}", in_window.len()));

        let summary = sdk.summary(timeframe, &now).unwrap();
        c.check(
            "daily buckets",
            summary.daily.len() == timeframe.bucket_count(),
            &format!("{}", summary.daily.len()),
        );
        c.check(
            "budget percentage in range",
            (0.0..=1.0).contains(&summary.budget_percentage),
            &format!("{:.3}", summary.budget_percentage),
        );

        match sdk.insights().for_timeframe(timeframe) {
            Ok(insights) => c.check("insights", true, &format!("{} insights", insights.len())),
            Err(e) => c.check("insights", false, &e.to_string()),
        }
    }

    eprintln!("\n  pass={} fail={}", c.pass, c.fail);
    assert_eq!(c.fail, 0, "{} smoke checks failed", c.fail);
}
