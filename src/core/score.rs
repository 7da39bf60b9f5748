use serde::Serialize;

use crate::core::aggregate::DailyTotals;
use crate::core::breakdown;
use crate::core::macros::EffectiveTargets;

/// Multiplier turning the coefficient of variation (percent) into score points.
pub const CV_SCALE: f64 = 2.0;

/// Maximum points for each nutrition sub-score; four of them sum to 100.
pub const COMPONENT_MAX: f64 = 25.0;

/// Acceptable share of macro calories, percent, as (min, max).
const PROTEIN_RANGE: (f64, f64) = (10.0, 35.0);
const CARBS_RANGE: (f64, f64) = (45.0, 65.0);
const FAT_RANGE: (f64, f64) = (20.0, 35.0);
/// Percentage points outside a range at which that macro earns nothing.
const MACRO_TOLERANCE_PP: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConsistencyRating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl ConsistencyRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }
}

impl std::fmt::Display for ConsistencyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyScore {
    pub score: f64,
    /// Coefficient of variation of daily calories, percent.
    pub cv: f64,
    pub mean_calories: f64,
    pub std_dev: f64,
    pub rating: ConsistencyRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_total(total: f64) -> Self {
        if total >= 90.0 {
            Self::A
        } else if total >= 75.0 {
            Self::B
        } else if total >= 60.0 {
            Self::C
        } else if total >= 45.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub name: &'static str,
    pub score: f64,
    pub max: f64,
    pub status: &'static str,
}

impl ScoreComponent {
    fn new(name: &'static str, fraction: f64) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let status = if fraction >= 0.9 {
            "Excellent"
        } else if fraction >= 0.7 {
            "Good"
        } else if fraction >= 0.5 {
            "Fair"
        } else {
            "Needs work"
        };
        Self {
            name,
            score: fraction * COMPONENT_MAX,
            max: COMPONENT_MAX,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionScore {
    pub total: f64,
    pub grade: Grade,
    pub breakdown: Vec<ScoreComponent>,
}

/// `100 - min(100, CV * CV_SCALE)` over daily calories.
///
/// `None` with fewer than two logged days or a zero mean.
pub fn consistency_score(days: &[DailyTotals]) -> Option<ConsistencyScore> {
    if days.len() < 2 {
        return None;
    }
    let n = days.len() as f64;
    let mean = days.iter().map(|d| d.calories).sum::<f64>() / n;
    if mean <= 0.0 {
        return None;
    }
    let variance = days
        .iter()
        .map(|d| (d.calories - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();
    let cv = std_dev / mean * 100.0;
    let score = 100.0 - (cv * CV_SCALE).min(100.0);

    Some(ConsistencyScore {
        score,
        cv,
        mean_calories: mean,
        std_dev,
        rating: ConsistencyRating::from_score(score),
    })
}

fn range_fraction(value: f64, (lo, hi): (f64, f64)) -> f64 {
    let distance = if value < lo {
        lo - value
    } else if value > hi {
        value - hi
    } else {
        0.0
    };
    (1.0 - distance / MACRO_TOLERANCE_PP).max(0.0)
}

/// Composite 0-100 score from protein and calorie adherence, logging
/// frequency and macro balance.
///
/// `expected_days` is how many days could have been logged in the window.
/// `None` when nothing was logged.
pub fn nutrition_score(
    days: &[DailyTotals],
    expected_days: i64,
    targets: &EffectiveTargets,
) -> Option<NutritionScore> {
    if days.is_empty() {
        return None;
    }
    let n = days.len() as f64;
    let avg_protein = days.iter().map(|d| d.protein_g).sum::<f64>() / n;
    let avg_calories = days.iter().map(|d| d.calories).sum::<f64>() / n;

    // an unset target earns nothing
    let protein = if targets.protein_g > 0.0 {
        avg_protein / targets.protein_g
    } else {
        0.0
    };

    let calories = if targets.calories > 0.0 {
        let deviation = (avg_calories - targets.calories).abs() / targets.calories;
        1.0 - deviation * 2.0
    } else {
        0.0
    };

    let frequency = n / expected_days.max(1) as f64;

    let balance = breakdown::macro_analysis(days, None)
        .map(|m| {
            (range_fraction(m.protein_percent, PROTEIN_RANGE)
                + range_fraction(m.carbs_percent, CARBS_RANGE)
                + range_fraction(m.fat_percent, FAT_RANGE))
                / 3.0
        })
        .unwrap_or(0.0);

    let breakdown = vec![
        ScoreComponent::new("Protein", protein),
        ScoreComponent::new("Calories", calories),
        ScoreComponent::new("Consistency", frequency),
        ScoreComponent::new("Macro balance", balance),
    ];
    let total = breakdown.iter().map(|c| c.score).sum::<f64>().clamp(0.0, 100.0);

    tracing::debug!(total, "nutrition score");

    Some(NutritionScore {
        total,
        grade: Grade::from_total(total),
        breakdown,
    })
}
