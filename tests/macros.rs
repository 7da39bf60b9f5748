mod common;

use healthlens::core::macros;
use healthlens::error::AnalyticsError;
use healthlens::models::config::Targets;
use healthlens::models::{ActivityLevel, FitnessGoal, Gender, Profile};

use common::approx;

fn profile() -> Profile {
    Profile {
        age: Some(30),
        gender: Gender::Male,
        height_cm: Some(180.0),
        current_weight_kg: Some(80.0),
        activity_level: ActivityLevel::Moderate,
        fitness_goal: FitnessGoal::Cut,
    }
}

#[test]
fn test_cut_recommendation() {
    let r = macros::recommend(&profile()).unwrap();
    assert!(approx(r.bmr, 1780.0, 1e-9));
    assert!(approx(r.tdee, 2759.0, 1e-9));
    assert!(approx(r.calories, 2259.0, 1e-9));
    assert!(approx(r.protein_g, 160.0, 1e-9));
    assert!(approx(r.fat_g, 62.75, 1e-9));
    assert!(approx(r.carbs_g, 263.5625, 1e-9));
    assert!(!r.floor_applied);
    assert_eq!(r.goal, FitnessGoal::Cut);
}

#[test]
fn test_macro_calories_add_up() {
    for goal in [FitnessGoal::Maintain, FitnessGoal::Bulk, FitnessGoal::Cut, FitnessGoal::Ripped] {
        let r = macros::recommend(&Profile {
            fitness_goal: goal,
            ..profile()
        })
        .unwrap();
        let kcal = r.protein_g * 4.0 + r.carbs_g * 4.0 + r.fat_g * 9.0;
        assert!(approx(kcal, r.calories, 1e-6), "{goal}: {kcal} vs {}", r.calories);
    }
}

#[test]
fn test_female_bmr_offset() {
    let bmr = macros::bmr(60.0, 165.0, 40, Gender::Female);
    assert!(approx(bmr, 600.0 + 1031.25 - 200.0 - 161.0, 1e-9));
}

#[test]
fn test_calorie_floor() {
    let r = macros::recommend(&Profile {
        age: Some(60),
        gender: Gender::Female,
        height_cm: Some(150.0),
        current_weight_kg: Some(45.0),
        activity_level: ActivityLevel::Sedentary,
        fitness_goal: FitnessGoal::Ripped,
    })
    .unwrap();
    assert!(r.floor_applied);
    assert!(approx(r.calories, r.bmr * 0.8, 1e-9));
    assert!(r.carbs_g >= 0.0);
}

#[test]
fn test_incomplete_profile_lists_missing_fields() {
    let err = macros::recommend(&Profile {
        age: None,
        current_weight_kg: None,
        ..profile()
    })
    .unwrap_err();
    assert_eq!(
        err,
        AnalyticsError::IncompleteProfile {
            missing: vec!["age", "current_weight_kg"]
        }
    );
}

#[test]
fn test_negative_height_is_rejected() {
    let err = macros::recommend(&Profile {
        height_cm: Some(-5.0),
        ..profile()
    })
    .unwrap_err();
    assert!(matches!(err, AnalyticsError::Precondition(_)));
}

#[test]
fn test_effective_targets_auto_and_manual() {
    let manual = Targets::default();
    let t = macros::effective_targets(&profile(), &manual).unwrap();
    assert!(!t.is_auto);
    assert!(approx(t.calories, manual.daily_calories, 1e-9));

    let auto = Targets {
        use_auto_macros: true,
        ..Targets::default()
    };
    let t = macros::effective_targets(&profile(), &auto).unwrap();
    assert!(t.is_auto);
    assert!(approx(t.calories, 2259.0, 1e-9));

    // incomplete profile falls back to manual values
    let t = macros::effective_targets(&Profile::default(), &auto).unwrap();
    assert!(!t.is_auto);
    assert!(approx(t.protein_g, auto.protein_g, 1e-9));
}
