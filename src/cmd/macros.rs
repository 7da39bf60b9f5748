use anyhow::Result;
use serde_json::json;

use healthlens::core::macros;
use healthlens::core::source::EntrySource;
use healthlens::db::{Database, LocalStore};
use healthlens::error::AnalyticsError;
use healthlens::models::config::Config;
use healthlens::output;
use healthlens::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let profile = LocalStore::new(&db, &config).fetch_profile()?;

    let recommendation = match macros::recommend(&profile) {
        Ok(r) => Some(r),
        Err(AnalyticsError::IncompleteProfile { missing }) => {
            if human_flag {
                println!(
                    "Profile incomplete, set: {} (healthlens config set <key> <value>)",
                    missing.join(", ")
                );
            } else {
                let out = output::success(
                    "macros",
                    json!({ "recommendation": null, "missing": missing }),
                );
                println!("{}", serde_json::to_string(&out)?);
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let targets = macros::effective_targets(&profile, &config.targets)?;

    if human_flag {
        if let Some(r) = &recommendation {
            println!("{}", human::format_recommendation(r));
        }
        println!("{}", human::format_targets(&targets));
    } else {
        let out = output::success(
            "macros",
            json!({ "recommendation": recommendation, "effective_targets": targets }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
