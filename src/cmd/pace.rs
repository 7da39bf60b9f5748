use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use healthlens::core::pace;
use healthlens::core::source::EntrySource;
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

    let weights = store.fetch_weight_entries(&window)?;
    let result = pace::weight_pace(&weights)?;
    let volatility = pace::weight_volatility(&weights)?;
    let weeks_to_target = match (
        config.targets.target_weight_kg,
        result.current_weight,
        result.weekly_rate,
    ) {
        (Some(target), Some(current), Some(rate)) => pace::weeks_to_target(current, rate, target),
        _ => None,
    };

    if human_flag {
        println!("{}", human::format_pace(&result, &config.units));
        if let Some(weeks) = weeks_to_target {
            println!("Target weight in about {:.1} week(s)", weeks);
        }
    } else {
        let out = output::success(
            "pace",
            json!({
                "window": window,
                "pace": result,
                "volatility": volatility,
                "target_weight": config.targets.target_weight_kg,
                "weeks_to_target": weeks_to_target,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
