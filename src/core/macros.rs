use serde::Serialize;

use crate::error::{AnalyticsError, Result};
use crate::models::config::Targets;
use crate::models::{FitnessGoal, Gender, Profile};

/// Protein per kilogram of body weight, independent of goal.
pub const PROTEIN_G_PER_KG: f64 = 2.0;
/// Share of calories assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;
/// Calorie targets never drop below this fraction of BMR.
pub const CALORIE_FLOOR_BMR_RATIO: f64 = 0.8;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroRecommendation {
    pub bmr: f64,
    pub tdee: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub goal: FitnessGoal,
    /// True when the goal offset was clamped to the BMR floor.
    pub floor_applied: bool,
    pub description: String,
}

/// Targets in effect: the recommendation when auto macros are on, manual otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub is_auto: bool,
}

struct Body {
    age: u32,
    height_cm: f64,
    weight_kg: f64,
}

fn complete_body(profile: &Profile) -> Result<Body> {
    let mut missing = Vec::new();
    if profile.age.is_none() {
        missing.push("age");
    }
    if profile.height_cm.is_none() {
        missing.push("height_cm");
    }
    if profile.current_weight_kg.is_none() {
        missing.push("current_weight_kg");
    }
    match (profile.age, profile.height_cm, profile.current_weight_kg) {
        (Some(age), Some(height_cm), Some(weight_kg)) => {
            for (name, v) in [("height_cm", height_cm), ("current_weight_kg", weight_kg)] {
                if !v.is_finite() || v < 0.0 {
                    return Err(AnalyticsError::Precondition(format!(
                        "{} must be a non-negative number, got {}",
                        name, v
                    )));
                }
            }
            Ok(Body {
                age,
                height_cm,
                weight_kg,
            })
        }
        _ => Err(AnalyticsError::IncompleteProfile { missing }),
    }
}

/// Mifflin-St Jeor basal metabolic rate, kcal/day.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset
}

/// Derive calorie and macro targets from a body profile.
pub fn recommend(profile: &Profile) -> Result<MacroRecommendation> {
    let body = complete_body(profile)?;
    let bmr = bmr(body.weight_kg, body.height_cm, body.age, profile.gender);
    let tdee = bmr * profile.activity_level.multiplier();

    let raw = tdee + profile.fitness_goal.calorie_offset();
    let floor = bmr * CALORIE_FLOOR_BMR_RATIO;
    let floor_applied = raw < floor;
    let calories = raw.max(floor);

    let protein_g = body.weight_kg * PROTEIN_G_PER_KG;
    let fat_g = calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let carbs_g = ((calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT)
        / KCAL_PER_G_CARBS)
        .max(0.0);

    tracing::debug!(bmr, tdee, calories, floor_applied, "macro recommendation");

    Ok(MacroRecommendation {
        bmr,
        tdee,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        goal: profile.fitness_goal,
        floor_applied,
        description: profile.fitness_goal.description().to_string(),
    })
}

/// Resolve which targets apply, falling back to manual values when the
/// recommendation is disabled or withheld.
pub fn effective_targets(profile: &Profile, manual: &Targets) -> Result<EffectiveTargets> {
    let manual_targets = EffectiveTargets {
        calories: manual.daily_calories,
        protein_g: manual.protein_g,
        carbs_g: manual.carbs_g,
        fat_g: manual.fat_g,
        is_auto: false,
    };
    if !manual.use_auto_macros {
        return Ok(manual_targets);
    }
    match recommend(profile) {
        Ok(r) => Ok(EffectiveTargets {
            calories: r.calories,
            protein_g: r.protein_g,
            carbs_g: r.carbs_g,
            fat_g: r.fat_g,
            is_auto: true,
        }),
        Err(AnalyticsError::IncompleteProfile { missing }) => {
            tracing::info!(?missing, "auto macros withheld, using manual targets");
            Ok(manual_targets)
        }
        Err(e) => Err(e),
    }
}
