use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::error::AnalyticsError;
use crate::models::{LogEntry, PeriodWindow};

/// Food totals for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub entry_count: u32,
}

impl DailyTotals {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            entry_count: 0,
        }
    }
}

/// A log entry whose date and values passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub date: NaiveDate,
    /// Time of day, when the stored date carried one.
    pub time: Option<NaiveTime>,
    pub entry: LogEntry,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Aggregation {
    /// Sparse, ascending by date. Dates without entries are omitted.
    pub days: Vec<DailyTotals>,
    #[serde(skip)]
    pub entries: Vec<ValidEntry>,
    #[serde(skip)]
    pub rejected: Vec<AnalyticsError>,
}

impl Aggregation {
    pub fn logged_dates(&self) -> HashSet<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub total_days_logged: u32,
    pub avg_daily_calories: f64,
    pub avg_daily_protein: f64,
    pub avg_daily_carbs: f64,
    pub avg_daily_fat: f64,
    pub calorie_min: f64,
    pub calorie_max: f64,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

/// Parse a stored entry date into a calendar date and optional time of day.
pub fn parse_entry_date(raw: &str) -> Option<(NaiveDate, Option<NaiveTime>)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some((date, None));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        let local = dt.naive_local();
        return Some((local.date(), Some(local.time())));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| (dt.date(), Some(dt.time())))
}

/// Validate one entry, returning the reason it must be dropped.
pub fn validate_entry(entry: &LogEntry) -> Result<ValidEntry, AnalyticsError> {
    let invalid = |reason: String| AnalyticsError::InvalidEntry {
        id: entry.id.clone(),
        reason,
    };

    if entry.date.trim().is_empty() {
        return Err(invalid("missing date".to_string()));
    }
    let (date, time) = parse_entry_date(&entry.date)
        .ok_or_else(|| invalid(format!("unparsable date '{}'", entry.date)))?;

    for (field, value) in [
        ("calories", entry.calories),
        ("protein_g", entry.protein_g),
        ("carbs_g", entry.carbs_g),
        ("fat_g", entry.fat_g),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!("{} must be a non-negative number, got {}", field, value)));
        }
    }

    Ok(ValidEntry {
        date,
        time,
        entry: entry.clone(),
    })
}

/// Group entries into per-day totals for every date in `window` with at least one entry.
///
/// Invalid entries are excluded and reported in `rejected`; aggregation continues.
/// No rounding is applied.
pub fn aggregate_daily(entries: &[LogEntry], window: &PeriodWindow) -> Aggregation {
    let mut buckets: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();
    let mut valid = Vec::new();
    let mut rejected = Vec::new();

    for entry in entries {
        match validate_entry(entry) {
            Ok(v) => {
                if !window.contains(v.date) {
                    continue;
                }
                let day = buckets
                    .entry(v.date)
                    .or_insert_with(|| DailyTotals::empty(v.date));
                day.calories += entry.calories;
                day.protein_g += entry.protein_g;
                day.carbs_g += entry.carbs_g;
                day.fat_g += entry.fat_g;
                day.entry_count += 1;
                valid.push(v);
            }
            Err(e) => {
                tracing::warn!(error = %e, "dropping food entry");
                rejected.push(e);
            }
        }
    }

    let days: Vec<DailyTotals> = buckets.into_values().collect();
    tracing::debug!(
        window = %window,
        days = days.len(),
        rejected = rejected.len(),
        "aggregated daily totals"
    );

    Aggregation {
        days,
        entries: valid,
        rejected,
    }
}

/// Dense copy of `days` with zero totals for dates that have no entries.
///
/// Bounded windows are filled edge to edge; `All` is filled between the first
/// and last logged dates.
pub fn fill_gaps(days: &[DailyTotals], window: &PeriodWindow) -> Vec<DailyTotals> {
    let span = match window {
        PeriodWindow::Range { .. } => window.dates(),
        PeriodWindow::All => match (days.first(), days.last()) {
            (Some(first), Some(last)) => first
                .date
                .iter_days()
                .take_while(|d| *d <= last.date)
                .collect(),
            _ => Vec::new(),
        },
    };

    let by_date: BTreeMap<NaiveDate, &DailyTotals> = days.iter().map(|d| (d.date, d)).collect();
    span.into_iter()
        .map(|date| {
            by_date
                .get(&date)
                .map(|d| (*d).clone())
                .unwrap_or_else(|| DailyTotals::empty(date))
        })
        .collect()
}

/// Whole-window averages, extremes and totals. `None` when nothing was logged.
pub fn overall_stats(days: &[DailyTotals]) -> Option<OverallStats> {
    if days.is_empty() {
        return None;
    }
    let n = days.len() as f64;
    let total_calories: f64 = days.iter().map(|d| d.calories).sum();
    let total_protein: f64 = days.iter().map(|d| d.protein_g).sum();
    let total_carbs: f64 = days.iter().map(|d| d.carbs_g).sum();
    let total_fat: f64 = days.iter().map(|d| d.fat_g).sum();
    let calorie_min = days.iter().map(|d| d.calories).fold(f64::INFINITY, f64::min);
    let calorie_max = days
        .iter()
        .map(|d| d.calories)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(OverallStats {
        total_days_logged: days.len() as u32,
        avg_daily_calories: total_calories / n,
        avg_daily_protein: total_protein / n,
        avg_daily_carbs: total_carbs / n,
        avg_daily_fat: total_fat / n,
        calorie_min,
        calorie_max,
        total_calories,
        total_protein,
        total_carbs,
        total_fat,
    })
}
