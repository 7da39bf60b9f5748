use anyhow::Result;
use chrono::NaiveDate;

use healthlens::core::analytics;
use healthlens::db::{Database, LocalStore};
use healthlens::models::config::Config;
use healthlens::output;
use healthlens::output::human;

pub fn run(today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let store = LocalStore::new(&db, &config);
    let streaks = analytics::streaks(&store, today)?;

    if human_flag {
        println!("{}", human::format_streaks(&streaks));
    } else {
        let out = output::success("streak", serde_json::to_value(&streaks)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
