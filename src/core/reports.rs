use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::aggregate::DailyTotals;

/// Newest-first report length shown for weeks and months.
pub const REPORT_LIMIT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    /// Monday of the ISO week, or the first of the month.
    pub start: NaiveDate,
    pub days_logged: u32,
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    pub total_calories: f64,
}

fn period_start(date: NaiveDate, period: ReportPeriod) -> NaiveDate {
    match period {
        ReportPeriod::Weekly => date - Duration::days(date.weekday().num_days_from_monday() as i64),
        ReportPeriod::Monthly => date.with_day(1).unwrap_or(date),
    }
}

/// Roll daily totals up into weeks or months, newest first, at most `limit` rows.
pub fn period_reports(days: &[DailyTotals], period: ReportPeriod, limit: usize) -> Vec<PeriodReport> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&DailyTotals>> = BTreeMap::new();
    for day in days {
        buckets
            .entry(period_start(day.date, period))
            .or_default()
            .push(day);
    }

    buckets
        .into_iter()
        .rev()
        .take(limit)
        .map(|(start, group)| {
            let n = group.len() as f64;
            let total_calories: f64 = group.iter().map(|d| d.calories).sum();
            PeriodReport {
                start,
                days_logged: group.len() as u32,
                avg_calories: total_calories / n,
                avg_protein: group.iter().map(|d| d.protein_g).sum::<f64>() / n,
                avg_carbs: group.iter().map(|d| d.carbs_g).sum::<f64>() / n,
                avg_fat: group.iter().map(|d| d.fat_g).sum::<f64>() / n,
                total_calories,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32, calories: f64) -> DailyTotals {
        DailyTotals {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            calories,
            protein_g: 100.0,
            carbs_g: 200.0,
            fat_g: 60.0,
            entry_count: 1,
        }
    }

    #[test]
    fn test_weekly_buckets_start_on_monday_newest_first() {
        // 2025-01-06 is a Monday
        let days = vec![
            day(2025, 1, 5, 1800.0),
            day(2025, 1, 6, 2000.0),
            day(2025, 1, 8, 2400.0),
        ];
        let reports = period_reports(&days, ReportPeriod::Weekly, REPORT_LIMIT);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].start, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(reports[0].days_logged, 2);
        assert!((reports[0].avg_calories - 2200.0).abs() < 1e-9);
        assert_eq!(reports[1].start, NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
    }

    #[test]
    fn test_monthly_reports_are_limited() {
        let days: Vec<DailyTotals> = (1..=12)
            .flat_map(|m| [day(2024, m, 1, 2000.0), day(2025, m, 15, 2100.0)])
            .collect();
        let reports = period_reports(&days, ReportPeriod::Monthly, REPORT_LIMIT);
        assert_eq!(reports.len(), 12);
        assert_eq!(reports[0].start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
    }
}
