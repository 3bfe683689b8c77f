use chrono::Local;
use nudge_sdk::format::{currency, currency_with_decimals, percentage};
use nudge_sdk::{AsyncNudgeSdk, BudgetStatus, Timeframe};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nudge_sdk=info,nudge_spending_report=info".into()),
        )
        .init();

    let sdk = match AsyncNudgeSdk::builder().build().await {
        Ok(sdk) => sdk,
        Err(e) => {
            tracing::error!("failed to initialize Nudge SDK: {e}");
            std::process::exit(1);
        }
    };

    for timeframe in Timeframe::ALL {
        let summary = match sdk.summary(timeframe, Local::now()).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!("failed to load data: {e}");
                std::process::exit(1);
            }
        };

        println!("== {} ==", timeframe);
        println!("  spent      {}", currency_with_decimals(summary.total_spent));
        println!(
            "  budget     {} of {} ({} used){}",
            currency(summary.total_spent),
            currency(summary.budget),
            percentage(summary.budget_percentage),
            if summary.budget_status == BudgetStatus::NearLimit {
                "  !! near limit"
            } else {
                ""
            }
        );
        println!("  remaining  {}", currency(summary.budget_remaining));
        println!("  avg/day    {}", currency(summary.average_daily));

        if summary.top_categories.is_empty() {
            println!("  no purchases in this window");
        }
        for entry in &summary.top_categories {
            println!(
                "  {:<14} {:>10} {:>5}",
                entry.category.label(),
                currency_with_decimals(entry.amount),
                percentage(entry.share(summary.total_spent))
            );
        }

        let busiest = summary
            .daily
            .iter()
            .max_by(|a, b| a.amount.total_cmp(&b.amount));
        if let Some(day) = busiest.filter(|d| d.amount > 0.0) {
            println!("  busiest day {} ({})", day.date, currency(day.amount));
        }

        match sdk.insights(timeframe).await {
            Ok(insights) => {
                for insight in insights {
                    println!("  * {}\n    tip: {}", insight.insight, insight.tip);
                }
            }
            Err(e) => tracing::warn!("failed to load insights: {e}"),
        }
        println!();
    }

    if let Err(e) = sdk.close().await {
        tracing::warn!("failed to close SDK: {e}");
    }
}
