use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use healthlens::core::compare;
use healthlens::db::{Database, LocalStore};
use healthlens::models::PeriodWindow;
use healthlens::models::config::Config;
use healthlens::output;
use healthlens::output::human;

pub fn run(days: u32, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let store = LocalStore::new(&db, &config);

    let this_window = PeriodWindow::last_days(today, days)?;
    let Some(last_window) = this_window.preceding()? else {
        anyhow::bail!("cannot compare an unbounded window");
    };
    let summary = compare::compare_windows(&store, &this_window, &last_window)?;

    if human_flag {
        println!("{} vs {}\n", this_window, last_window);
        println!("{}", human::format_comparison(&summary));
    } else {
        let out = output::success(
            "compare",
            json!({
                "this_window": this_window,
                "last_window": last_window,
                "summary": summary,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
