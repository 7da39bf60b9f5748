use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use healthlens::core::aggregate;
use healthlens::core::source::EntrySource;
use healthlens::db::{Database, LocalStore};
use healthlens::models::PeriodWindow;
use healthlens::models::config::Config;
use healthlens::output;
use healthlens::output::human;

pub fn run(period: &str, fill: bool, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let store = LocalStore::new(&db, &config);
    let window = PeriodWindow::from_period(period, today)?;

    let logs = store.fetch_daily_logs(&window)?;
    let agg = aggregate::aggregate_daily(&logs, &window);
    let days = if fill {
        aggregate::fill_gaps(&agg.days, &window)
    } else {
        agg.days.clone()
    };

    if human_flag {
        println!("Daily totals: {}\n", window);
        println!("{}", human::format_daily(&days));
    } else {
        let out = output::success(
            "daily",
            json!({
                "window": window,
                "days": days,
                "overall": aggregate::overall_stats(&agg.days),
                "rejected_entries": agg.rejected.len(),
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
