use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::profile::Profile;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub targets: Targets,
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Manually entered daily targets and weekly training goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Targets {
    #[serde(default = "default_daily_calories")]
    pub daily_calories: f64,
    #[serde(default = "default_protein_g")]
    pub protein_g: f64,
    #[serde(default = "default_carbs_g")]
    pub carbs_g: f64,
    #[serde(default = "default_fat_g")]
    pub fat_g: f64,
    #[serde(default)]
    pub use_auto_macros: bool,
    pub target_weight_kg: Option<f64>,
    #[serde(default = "default_weekly_workouts")]
    pub weekly_workouts: u32,
    #[serde(default = "default_weekly_runs")]
    pub weekly_runs: u32,
}

fn default_daily_calories() -> f64 {
    2500.0
}
fn default_protein_g() -> f64 {
    150.0
}
fn default_carbs_g() -> f64 {
    300.0
}
fn default_fat_g() -> f64 {
    70.0
}
fn default_weekly_workouts() -> u32 {
    4
}
fn default_weekly_runs() -> u32 {
    2
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            daily_calories: default_daily_calories(),
            protein_g: default_protein_g(),
            carbs_g: default_carbs_g(),
            fat_g: default_fat_g(),
            use_auto_macros: false,
            target_weight_kg: None,
            weekly_workouts: default_weekly_workouts(),
            weekly_runs: default_weekly_runs(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Units {
    #[serde(default = "default_system")]
    pub system: String,
    #[serde(default = "default_weight_unit")]
    pub weight: String,
}

fn default_system() -> String {
    "metric".to_string()
}
fn default_weight_unit() -> String {
    "kg".to_string()
}

impl Default for Units {
    fn default() -> Self {
        Self {
            system: "metric".to_string(),
            weight: "kg".to_string(),
        }
    }
}

impl Units {
    pub fn imperial() -> Self {
        Self {
            system: "imperial".to_string(),
            weight: "lbs".to_string(),
        }
    }

    pub fn is_imperial(&self) -> bool {
        self.system == "imperial"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;

            file.write_all(contents.as_bytes())?;

            // mode() only applies on create
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a single `key = value` update, as used by `config set`.
    pub fn set_key(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "age" => self.profile.age = Some(value.parse()?),
            "gender" => self.profile.gender = value.parse()?,
            "height" | "height_cm" => self.profile.height_cm = Some(value.parse()?),
            "weight" | "current_weight_kg" => {
                self.profile.current_weight_kg = Some(value.parse()?)
            }
            "activity_level" => self.profile.activity_level = value.parse()?,
            "fitness_goal" | "goal" => self.profile.fitness_goal = value.parse()?,
            "targets.calories" => self.targets.daily_calories = value.parse()?,
            "targets.protein" => self.targets.protein_g = value.parse()?,
            "targets.carbs" => self.targets.carbs_g = value.parse()?,
            "targets.fat" => self.targets.fat_g = value.parse()?,
            "targets.auto_macros" => self.targets.use_auto_macros = value.parse()?,
            "targets.weight" => self.targets.target_weight_kg = Some(value.parse()?),
            "targets.weekly_workouts" => self.targets.weekly_workouts = value.parse()?,
            "targets.weekly_runs" => self.targets.weekly_runs = value.parse()?,
            "units.system" => match value {
                "metric" => self.units = Units::default(),
                "imperial" => self.units = Units::imperial(),
                _ => anyhow::bail!("units.system must be 'metric' or 'imperial'"),
            },
            "logging.level" => self.logging.level = value.to_string(),
            "logging.format" => match value {
                "pretty" | "json" => self.logging.format = value.to_string(),
                _ => anyhow::bail!("logging.format must be 'pretty' or 'json'"),
            },
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("HEALTHLENS_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .map(|h| h.join(".healthlens"))
            .unwrap_or_else(|| PathBuf::from(".healthlens"))
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
