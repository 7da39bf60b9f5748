use anyhow::Result;
use std::io::{self, Write};
use std::str::FromStr;

use healthlens::core::logging;
use healthlens::db::Database;
use healthlens::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("HealthLens - Initial Setup\n");

        config.profile.age = Some(prompt_parse("Age")?);
        config.profile.gender = prompt_parse("Gender (male/female)")?;
        config.profile.height_cm = Some(prompt_parse("Height (cm)")?);
        let weight: f64 = prompt_parse("Current weight (kg)")?;
        config.profile.activity_level =
            prompt_parse("Activity level (sedentary/light/moderate/active/very_active)")?;
        config.profile.fitness_goal = prompt_parse("Goal (maintain/bulk/cut/ripped)")?;

        config.save()?;

        // initial weigh-in; the profile weight follows the latest entry
        let db = Database::open(&Config::db_path())?;
        logging::log_weight(&db, &config, weight, Some("initial"), None)?;

        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        config.save()?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_parse<T: FromStr>(label: &str) -> Result<T> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Invalid value, try again."),
        }
    }
}
