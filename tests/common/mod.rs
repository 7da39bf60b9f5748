#![allow(dead_code)]

use chrono::NaiveDate;
use healthlens::core::aggregate::DailyTotals;
use healthlens::core::logging::local_noon;
use healthlens::db::Database;
use healthlens::models::{LogEntry, WeightEntry};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Food entry on a raw stored date string.
pub fn food(raw_date: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> LogEntry {
    LogEntry::new("meal".to_string(), calories, raw_date.to_string()).with_macros(protein, carbs, fat)
}

pub fn named_food(name: &str, raw_date: &str, calories: f64, protein: f64) -> LogEntry {
    LogEntry::new(name.to_string(), calories, raw_date.to_string()).with_macros(protein, 0.0, 0.0)
}

/// Weight entry recorded at local noon on `date`.
pub fn weight_on(date: NaiveDate, kg: f64) -> WeightEntry {
    WeightEntry::new(kg, local_noon(date))
}

pub fn day(date: NaiveDate, calories: f64, protein: f64, carbs: f64, fat: f64) -> DailyTotals {
    DailyTotals {
        date,
        calories,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: fat,
        entry_count: 1,
    }
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}
