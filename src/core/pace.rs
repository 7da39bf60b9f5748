use serde::Serialize;

use crate::error::{AnalyticsError, Result};
use crate::models::WeightEntry;

/// Energy stored in one kilogram of adipose tissue, kcal.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Below this absolute weekly rate (kg/week) the pace is slow.
pub const SLOW_PACE_KG_PER_WEEK: f64 = 0.25;
/// Above this absolute weekly rate (kg/week) the pace is aggressive.
pub const AGGRESSIVE_PACE_KG_PER_WEEK: f64 = 1.0;

/// Change between successive entries that counts as a significant fluctuation, kg.
const SIGNIFICANT_FLUCTUATION_KG: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceAssessment {
    Slow,
    Healthy,
    Aggressive,
}

impl PaceAssessment {
    pub fn from_rate(weekly_rate: f64) -> Self {
        let r = weekly_rate.abs();
        if r < SLOW_PACE_KG_PER_WEEK {
            Self::Slow
        } else if r <= AGGRESSIVE_PACE_KG_PER_WEEK {
            Self::Healthy
        } else {
            Self::Aggressive
        }
    }
}

impl std::fmt::Display for PaceAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slow => write!(f, "slow"),
            Self::Healthy => write!(f, "healthy"),
            Self::Aggressive => write!(f, "aggressive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projections {
    #[serde(rename = "4_weeks")]
    pub weeks_4: f64,
    #[serde(rename = "8_weeks")]
    pub weeks_8: f64,
    #[serde(rename = "12_weeks")]
    pub weeks_12: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPace {
    pub start_weight: Option<f64>,
    pub current_weight: Option<f64>,
    pub total_change: Option<f64>,
    /// Whole days between the first and last entry.
    pub days: Option<i64>,
    /// Least-squares slope of weight over time, kg/week.
    pub weekly_rate: Option<f64>,
    pub monthly_rate: Option<f64>,
    /// Negative for a deficit, positive for a surplus.
    pub estimated_daily_deficit: Option<f64>,
    pub pace_assessment: Option<PaceAssessment>,
    pub projections: Option<Projections>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightAnalysis {
    pub start_weight: f64,
    pub current_weight: f64,
    pub total_change: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub avg_weight: f64,
    pub measurements: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightVolatility {
    pub avg_fluctuation: f64,
    pub max_fluctuation: f64,
    pub significant_fluctuations: u32,
}

/// Check weights and return the series sorted ascending by `recorded_at`.
fn sorted_series(entries: &[WeightEntry]) -> Result<Vec<&WeightEntry>> {
    if let Some(bad) = entries
        .iter()
        .find(|e| !e.weight_kg.is_finite() || e.weight_kg < 0.0)
    {
        return Err(AnalyticsError::Precondition(format!(
            "weight entry {} has invalid weight {}",
            bad.id, bad.weight_kg
        )));
    }
    let mut sorted: Vec<&WeightEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.recorded_at);
    Ok(sorted)
}

/// Ordinary least-squares slope of `y` over `x`.
pub fn regression_slope(points: &[(f64, f64)]) -> Result<f64> {
    if points.len() < 2 {
        return Err(AnalyticsError::InsufficientData {
            required: 2,
            available: points.len(),
        });
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_xx: f64 = points.iter().map(|(x, _)| x * x).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < 1e-12 {
        // every point at the same instant
        return Err(AnalyticsError::InsufficientData {
            required: 2,
            available: 1,
        });
    }
    Ok((n * sum_xy - sum_x * sum_y) / denominator)
}

/// Rate of weight change and fixed-horizon projections.
///
/// Fewer than two entries (or all entries at one instant) leave every rate and
/// projection field `None`. Negative weights fail with a precondition error.
pub fn weight_pace(entries: &[WeightEntry]) -> Result<WeightPace> {
    let series = sorted_series(entries)?;

    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Ok(WeightPace {
            start_weight: None,
            current_weight: None,
            total_change: None,
            days: None,
            weekly_rate: None,
            monthly_rate: None,
            estimated_daily_deficit: None,
            pace_assessment: None,
            projections: None,
        });
    };

    let start = first.weight_kg;
    let current = last.weight_kg;
    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|e| {
            let days = (e.recorded_at - first.recorded_at).num_seconds() as f64 / 86_400.0;
            (days, e.weight_kg)
        })
        .collect();

    let weekly_rate = match regression_slope(&points) {
        Ok(per_day) => Some(per_day * 7.0),
        Err(e) => {
            tracing::debug!(error = %e, "weight pace not computed");
            None
        }
    };

    let projections = weekly_rate.map(|rate| Projections {
        weeks_4: current + rate * 4.0,
        weeks_8: current + rate * 8.0,
        weeks_12: current + rate * 12.0,
    });

    Ok(WeightPace {
        start_weight: Some(start),
        current_weight: Some(current),
        total_change: Some(current - start),
        days: Some((last.recorded_at - first.recorded_at).num_days()),
        weekly_rate,
        monthly_rate: weekly_rate.map(|r| r * 30.0 / 7.0),
        estimated_daily_deficit: weekly_rate.map(|r| r * KCAL_PER_KG / 7.0),
        pace_assessment: weekly_rate.map(PaceAssessment::from_rate),
        projections,
    })
}

/// Summary of the weight series. `None` when there are no entries.
pub fn weight_analysis(entries: &[WeightEntry]) -> Result<Option<WeightAnalysis>> {
    let series = sorted_series(entries)?;
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Ok(None);
    };
    let weights: Vec<f64> = series.iter().map(|e| e.weight_kg).collect();
    Ok(Some(WeightAnalysis {
        start_weight: first.weight_kg,
        current_weight: last.weight_kg,
        total_change: last.weight_kg - first.weight_kg,
        min_weight: weights.iter().cloned().fold(f64::INFINITY, f64::min),
        max_weight: weights.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        avg_weight: weights.iter().sum::<f64>() / weights.len() as f64,
        measurements: weights.len() as u32,
    }))
}

/// Fluctuation between successive entries. `None` with fewer than two entries.
pub fn weight_volatility(entries: &[WeightEntry]) -> Result<Option<WeightVolatility>> {
    let series = sorted_series(entries)?;
    let changes: Vec<f64> = series
        .windows(2)
        .map(|pair| (pair[1].weight_kg - pair[0].weight_kg).abs())
        .collect();
    if changes.is_empty() {
        return Ok(None);
    }
    Ok(Some(WeightVolatility {
        avg_fluctuation: changes.iter().sum::<f64>() / changes.len() as f64,
        max_fluctuation: changes.iter().cloned().fold(0.0, f64::max),
        significant_fluctuations: changes
            .iter()
            .filter(|c| **c > SIGNIFICANT_FLUCTUATION_KG + 1e-9)
            .count() as u32,
    }))
}

/// Weeks until `target_kg` at the current rate, when the rate moves toward it.
pub fn weeks_to_target(current_kg: f64, weekly_rate: f64, target_kg: f64) -> Option<f64> {
    let remaining = target_kg - current_kg;
    if remaining == 0.0 {
        return Some(0.0);
    }
    if weekly_rate == 0.0 || remaining.signum() != weekly_rate.signum() {
        return None;
    }
    Some(remaining / weekly_rate)
}
