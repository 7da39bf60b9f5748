mod common;

use chrono::Duration;
use healthlens::core::compare::{self, PeriodStats};
use healthlens::core::source::Snapshot;
use healthlens::error::AnalyticsError;
use healthlens::models::{PeriodWindow, RunningSession, SessionCounts, WorkoutSession};

use common::{approx, date, day, food};

fn stats(avg_calories: f64, avg_protein: f64, workouts: u32, runs: u32, days: u32) -> PeriodStats {
    PeriodStats {
        avg_calories,
        avg_protein,
        workouts,
        runs,
        days_logged: days,
    }
}

#[test]
fn test_compare_differences_and_percentages() {
    let summary = compare::compare(stats(2200.0, 150.0, 4, 2, 7), stats(2000.0, 120.0, 3, 3, 5));
    let c = &summary.comparison;
    assert!(approx(c.calories_diff, 200.0, 1e-9));
    assert!(approx(c.calories_percent.unwrap(), 10.0, 1e-9));
    assert!(approx(c.protein_diff, 30.0, 1e-9));
    assert!(approx(c.protein_percent.unwrap(), 25.0, 1e-9));
    assert_eq!(c.workouts_diff, 1);
    assert_eq!(c.runs_diff, -1);
    assert_eq!(c.days_logged_diff, 2);
}

#[test]
fn test_percent_absent_when_previous_is_zero() {
    let summary = compare::compare(stats(2000.0, 100.0, 1, 0, 3), stats(0.0, 0.0, 0, 0, 0));
    assert!(summary.comparison.calories_percent.is_none());
    assert!(summary.comparison.protein_percent.is_none());
    assert!(approx(summary.comparison.calories_diff, 2000.0, 1e-9));
}

#[test]
fn test_period_stats_average_over_logged_days_only() {
    let days = vec![
        day(date(2025, 1, 1), 1800.0, 100.0, 0.0, 0.0),
        day(date(2025, 1, 3), 2200.0, 140.0, 0.0, 0.0),
    ];
    let s = compare::period_stats(&days, SessionCounts { workouts: 2, runs: 1 });
    assert!(approx(s.avg_calories, 2000.0, 1e-9));
    assert!(approx(s.avg_protein, 120.0, 1e-9));
    assert_eq!(s.days_logged, 2);
    assert_eq!(s.workouts, 2);
}

fn snapshot() -> Snapshot {
    let mut snap = Snapshot::default();
    for d in 1..=14u32 {
        let calories = if d <= 7 { 2000.0 } else { 2500.0 };
        snap.logs
            .push(food(&format!("2025-01-{:02}", d), calories, 100.0, 0.0, 0.0));
    }
    snap.workouts
        .push(WorkoutSession::new("legs".into(), 45, date(2025, 1, 9)));
    snap.workouts
        .push(WorkoutSession::new("push".into(), 50, date(2025, 1, 12)));
    snap.runs.push(RunningSession::new(5.0, 30, date(2025, 1, 3)));
    snap
}

#[test]
fn test_compare_windows_over_snapshot() {
    let this = PeriodWindow::last_days(date(2025, 1, 14), 7).unwrap();
    let last = this.preceding().unwrap().unwrap();
    assert_eq!(last.start(), Some(date(2025, 1, 1)));

    let summary = compare::compare_windows(&snapshot(), &this, &last).unwrap();
    assert!(approx(summary.this_period.avg_calories, 2500.0, 1e-9));
    assert!(approx(summary.last_period.avg_calories, 2000.0, 1e-9));
    assert!(approx(summary.comparison.calories_percent.unwrap(), 25.0, 1e-9));
    assert_eq!(summary.comparison.workouts_diff, 2);
    assert_eq!(summary.comparison.runs_diff, -1);
}

#[test]
fn test_non_adjacent_windows_are_rejected() {
    let this = PeriodWindow::last_days(date(2025, 1, 14), 7).unwrap();
    let gap = PeriodWindow::new(
        date(2025, 1, 1) - Duration::days(1),
        date(2025, 1, 6),
    )
    .unwrap();
    let err = compare::compare_windows(&snapshot(), &this, &gap).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalyticsError>(),
        Some(AnalyticsError::Precondition(_))
    ));
}
