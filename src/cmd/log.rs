use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use healthlens::core::logging;
use healthlens::core::units;
use healthlens::db::Database;
use healthlens::models::config::Config;
use healthlens::output;

pub fn run_food(
    name: &str,
    calories: f64,
    macros: (f64, f64, f64),
    date: Option<NaiveDate>,
    human: bool,
) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let e = logging::log_food(&db, name, calories, macros, date)?;

    if human {
        println!(
            "Logged: {} | {} {:.0} kcal (P {:.1} g, C {:.1} g, F {:.1} g)",
            e.date, e.name, e.calories, e.protein_g, e.carbs_g, e.fat_g
        );
    } else {
        let out = output::success("log", json!({ "entry": e }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_weight(value: f64, note: Option<&str>, date: Option<NaiveDate>, human: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let e = logging::log_weight(&db, &config, value, note, date)?;

    if human {
        let (v, unit) = units::to_display(e.weight_kg, &config.units);
        let at = e.recorded_at.with_timezone(&Local);
        let mut line = format!("Logged: {} | weight = {} {}", at.format("%Y-%m-%d %H:%M"), v, unit);
        if let Some(ref note) = e.note {
            line.push_str(&format!("  # {}", note));
        }
        println!("{}", line);
    } else {
        let out = output::success("log", json!({ "entry": e }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_workout(name: &str, duration_min: u32, date: Option<NaiveDate>, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let w = logging::log_workout(&db, name, duration_min, date)?;

    if human {
        println!("Logged: {} | workout {} ({} min)", w.date, w.name, w.duration_min);
    } else {
        let out = output::success("log", json!({ "entry": w }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_run(distance_km: f64, duration_min: u32, date: Option<NaiveDate>, human: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let r = logging::log_run(&db, distance_km, duration_min, date)?;
    let pace = r.pace_min_per_km();

    if human {
        let mut line = format!("Logged: {} | run {:.2} km in {} min", r.date, r.distance_km, r.duration_min);
        if let Some(p) = pace {
            line.push_str(&format!(" ({:.2} min/km)", p));
        }
        println!("{}", line);
    } else {
        let out = output::success("log", json!({ "entry": r, "pace_min_per_km": pace }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
