use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use healthlens::core::source::EntrySource;
use healthlens::core::{aggregate, analytics, macros, score};
use healthlens::db::{Database, LocalStore};
use healthlens::models::PeriodWindow;
use healthlens::models::config::Config;
use healthlens::output;
use healthlens::output::human;

pub fn run(period: &str, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let store = LocalStore::new(&db, &config);
    let window = PeriodWindow::from_period(period, today)?;

    let logs = store.fetch_daily_logs(&window)?;
    let agg = aggregate::aggregate_daily(&logs, &window);
    let targets = macros::effective_targets(&store.fetch_profile()?, &config.targets)?;

    let expected_days = analytics::expected_days(&window, &agg.days);
    let consistency = score::consistency_score(&agg.days);
    let nutrition = score::nutrition_score(&agg.days, expected_days, &targets);

    if human_flag {
        println!("Scores: {}\n", window);
        println!("{}", human::format_scores(consistency.as_ref(), nutrition.as_ref()));
    } else {
        let out = output::success(
            "score",
            json!({
                "window": window,
                "consistency": consistency,
                "nutrition": nutrition,
                "targets": targets,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
