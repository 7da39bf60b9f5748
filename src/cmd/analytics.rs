use anyhow::Result;
use chrono::NaiveDate;

use healthlens::core::analytics;
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

    let report = analytics::compute(&store, &window, today, &config.targets)?;

    if human_flag {
        println!("{}", human::format_analytics(&report, &config.units));
    } else {
        let out = output::success("analytics", serde_json::to_value(&report)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
