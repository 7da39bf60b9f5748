use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => anyhow::bail!("invalid gender: {} (expected male/female)", s),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" | "very-active" => Ok(Self::VeryActive),
            _ => anyhow::bail!(
                "invalid activity level: {} (expected sedentary/light/moderate/active/very_active)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    #[default]
    Maintain,
    Bulk,
    Cut,
    Ripped,
}

impl FitnessGoal {
    /// Calorie offset from TDEE, in kcal.
    pub fn calorie_offset(self) -> f64 {
        match self {
            Self::Maintain => 0.0,
            Self::Bulk => 300.0,
            Self::Cut => -500.0,
            Self::Ripped => -750.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Maintain => "Maintenance: eat at TDEE to hold current weight",
            Self::Bulk => "Bulking: TDEE + 300 kcal surplus for lean muscle gain",
            Self::Cut => "Cutting: TDEE - 500 kcal deficit for steady fat loss",
            Self::Ripped => "Get ripped: TDEE - 750 kcal aggressive cut, keep protein high",
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Maintain => write!(f, "maintain"),
            Self::Bulk => write!(f, "bulk"),
            Self::Cut => write!(f, "cut"),
            Self::Ripped => write!(f, "ripped"),
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "maintain" => Ok(Self::Maintain),
            "bulk" => Ok(Self::Bulk),
            "cut" => Ok(Self::Cut),
            "ripped" => Ok(Self::Ripped),
            _ => anyhow::bail!("invalid fitness goal: {} (expected maintain/bulk/cut/ripped)", s),
        }
    }
}

/// Body profile used for macro recommendations. Missing measurements stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Gender,
    pub height_cm: Option<f64>,
    pub current_weight_kg: Option<f64>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub fitness_goal: FitnessGoal,
}
