use anyhow::{Result, bail};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::core::units;
use crate::db::Database;
use crate::models::config::Config;
use crate::models::{LogEntry, RunningSession, WeightEntry, WorkoutSession};

fn check_amount(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        bail!("{} must be a non-negative number, got {}", name, value);
    }
    Ok(())
}

/// Food entries logged for the current day carry the time of day; back-dated
/// entries store the bare date.
fn entry_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.to_string(),
        None => Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

/// Macros in grams as `(protein, carbs, fat)`.
pub fn log_food(
    db: &Database,
    name: &str,
    calories: f64,
    macros: (f64, f64, f64),
    date: Option<NaiveDate>,
) -> Result<LogEntry> {
    let name = name.trim();
    if name.is_empty() {
        bail!("food name must not be empty");
    }
    check_amount("calories", calories)?;
    let (protein, carbs, fat) = macros;
    check_amount("protein", protein)?;
    check_amount("carbs", carbs)?;
    check_amount("fat", fat)?;

    let entry = LogEntry::new(name.to_string(), calories, entry_date(date))
        .with_macros(protein, carbs, fat);
    db.insert_food(&entry)?;
    Ok(entry)
}

/// Local noon on `date`, as UTC.
pub fn local_noon(date: NaiveDate) -> DateTime<Utc> {
    let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
    Local
        .from_local_datetime(&noon)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&noon))
}

/// `weight` is in the configured unit system and stored in kilograms.
/// Back-dated weigh-ins are stamped at local noon.
pub fn log_weight(
    db: &Database,
    config: &Config,
    weight: f64,
    note: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<WeightEntry> {
    check_amount("weight", weight)?;
    let kg = units::from_input(weight, &config.units);
    let recorded_at = match date {
        Some(d) => local_noon(d),
        None => Local::now().with_timezone(&Utc),
    };
    let mut entry = WeightEntry::new(kg, recorded_at);
    entry.note = note.map(String::from);
    db.insert_weight(&entry)?;
    Ok(entry)
}

pub fn log_workout(
    db: &Database,
    name: &str,
    duration_min: u32,
    date: Option<NaiveDate>,
) -> Result<WorkoutSession> {
    let name = name.trim();
    if name.is_empty() {
        bail!("workout name must not be empty");
    }
    let session = WorkoutSession::new(
        name.to_string(),
        duration_min,
        date.unwrap_or_else(|| Local::now().date_naive()),
    );
    db.insert_workout(&session)?;
    Ok(session)
}

pub fn log_run(
    db: &Database,
    distance_km: f64,
    duration_min: u32,
    date: Option<NaiveDate>,
) -> Result<RunningSession> {
    check_amount("distance", distance_km)?;
    let session = RunningSession::new(
        distance_km,
        duration_min,
        date.unwrap_or_else(|| Local::now().date_naive()),
    );
    db.insert_run(&session)?;
    Ok(session)
}
