use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days_logged: u32,
    /// Logged days as a percentage of the days since the first log, through `today`.
    pub consistency_rate: Option<f64>,
}

/// Compute logging streaks from the set of dates that have at least one food entry.
///
/// The current streak counts back from `today`, or from yesterday when today has
/// no entry yet. The longest streak is the first maximal run found scanning
/// dates in ascending order.
pub fn compute_streaks(dates: &HashSet<NaiveDate>, today: NaiveDate) -> StreakSummary {
    if dates.is_empty() {
        return StreakSummary {
            current_streak: 0,
            longest_streak: 0,
            total_days_logged: 0,
            consistency_rate: None,
        };
    }

    let mut check_date = if dates.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };
    let mut current = 0u32;
    while let Some(date) = check_date.filter(|d| dates.contains(d)) {
        current += 1;
        check_date = date.pred_opt();
    }

    let mut sorted: Vec<NaiveDate> = dates.iter().copied().collect();
    sorted.sort();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for date in &sorted {
        run = match prev {
            Some(p) if p.succ_opt() == Some(*date) => run + 1,
            _ => 1,
        };
        if run > longest {
            longest = run;
        }
        prev = Some(*date);
    }

    let total = dates.len() as u32;
    let first = sorted[0];
    let consistency_rate = if first <= today {
        let span = (today - first).num_days() + 1;
        let logged = sorted.iter().filter(|d| **d <= today).count();
        Some(logged as f64 / span as f64 * 100.0)
    } else {
        None
    };

    tracing::debug!(current, longest, total, "computed streaks");

    StreakSummary {
        current_streak: current,
        longest_streak: longest,
        total_days_logged: total,
        consistency_rate,
    }
}
