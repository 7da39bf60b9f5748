use anyhow::Result;
use serde::Serialize;

use crate::core::aggregate::{self, DailyTotals};
use crate::core::source::EntrySource;
use crate::error::AnalyticsError;
use crate::models::{PeriodWindow, SessionCounts};

/// Per-period values fed into a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStats {
    /// Mean over days with data; 0 when nothing was logged.
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub workouts: u32,
    pub runs: u32,
    pub days_logged: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub calories_diff: f64,
    /// `None` when the previous period averaged zero.
    pub calories_percent: Option<f64>,
    pub protein_diff: f64,
    pub protein_percent: Option<f64>,
    pub workouts_diff: i64,
    pub runs_diff: i64,
    pub days_logged_diff: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeSummary {
    pub this_period: PeriodStats,
    pub last_period: PeriodStats,
    pub comparison: Comparison,
}

pub fn period_stats(days: &[DailyTotals], sessions: SessionCounts) -> PeriodStats {
    let n = days.len();
    let mean = |f: fn(&DailyTotals) -> f64| {
        if n == 0 {
            0.0
        } else {
            days.iter().map(f).sum::<f64>() / n as f64
        }
    };
    PeriodStats {
        avg_calories: mean(|d| d.calories),
        avg_protein: mean(|d| d.protein_g),
        workouts: sessions.workouts,
        runs: sessions.runs,
        days_logged: n as u32,
    }
}

fn percent_change(diff: f64, base: f64) -> Option<f64> {
    if base == 0.0 {
        None
    } else {
        Some(diff / base * 100.0)
    }
}

/// Raw differences `this - last` for every metric, plus percentages for calories and protein.
pub fn compare(this_period: PeriodStats, last_period: PeriodStats) -> ComparativeSummary {
    let calories_diff = this_period.avg_calories - last_period.avg_calories;
    let protein_diff = this_period.avg_protein - last_period.avg_protein;
    let comparison = Comparison {
        calories_diff,
        calories_percent: percent_change(calories_diff, last_period.avg_calories),
        protein_diff,
        protein_percent: percent_change(protein_diff, last_period.avg_protein),
        workouts_diff: this_period.workouts as i64 - last_period.workouts as i64,
        runs_diff: this_period.runs as i64 - last_period.runs as i64,
        days_logged_diff: this_period.days_logged as i64 - last_period.days_logged as i64,
    };
    ComparativeSummary {
        this_period,
        last_period,
        comparison,
    }
}

/// Fetch and compare two adjacent, equal-length windows.
pub fn compare_windows(
    source: &impl EntrySource,
    this_window: &PeriodWindow,
    last_window: &PeriodWindow,
) -> Result<ComparativeSummary> {
    if !last_window.is_adjacent_before(this_window) {
        return Err(AnalyticsError::Precondition(format!(
            "comparison windows must be adjacent and equal length: last {} / this {}",
            last_window, this_window
        ))
        .into());
    }

    let stats_for = |window: &PeriodWindow| -> Result<PeriodStats> {
        let logs = source.fetch_daily_logs(window)?;
        let agg = aggregate::aggregate_daily(&logs, window);
        let sessions = source.fetch_session_counts(window)?;
        Ok(period_stats(&agg.days, sessions))
    };

    Ok(compare(stats_for(this_window)?, stats_for(last_window)?))
}
