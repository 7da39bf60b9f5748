mod common;

use healthlens::core::aggregate;
use healthlens::error::AnalyticsError;
use healthlens::models::{LogEntry, PeriodWindow};

use common::{approx, date, food};

#[test]
fn test_aggregate_sums_per_day() {
    let entries = vec![
        food("2025-01-01T08:00:00", 500.0, 30.0, 60.0, 10.0),
        food("2025-01-01T13:00:00", 700.0, 40.0, 80.0, 20.0),
        food("2025-01-02", 1800.0, 120.0, 200.0, 60.0),
    ];
    let agg = aggregate::aggregate_daily(&entries, &PeriodWindow::All);

    assert_eq!(agg.days.len(), 2);
    assert_eq!(agg.days[0].date, date(2025, 1, 1));
    assert!(approx(agg.days[0].calories, 1200.0, 1e-9));
    assert!(approx(agg.days[0].protein_g, 70.0, 1e-9));
    assert_eq!(agg.days[0].entry_count, 2);
    assert_eq!(agg.days[1].date, date(2025, 1, 2));
    assert!(agg.rejected.is_empty());
}

#[test]
fn test_aggregate_is_sparse_and_sorted() {
    let entries = vec![
        food("2025-01-05", 2000.0, 100.0, 200.0, 70.0),
        food("2025-01-01", 1500.0, 90.0, 150.0, 50.0),
    ];
    let agg = aggregate::aggregate_daily(&entries, &PeriodWindow::All);
    let dates: Vec<_> = agg.days.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 1, 5)]);
}

#[test]
fn test_aggregate_respects_window() {
    let window = PeriodWindow::new(date(2025, 1, 2), date(2025, 1, 3)).unwrap();
    let entries = vec![
        food("2025-01-01", 1000.0, 0.0, 0.0, 0.0),
        food("2025-01-02", 2000.0, 0.0, 0.0, 0.0),
        food("2025-01-03T21:00:00", 2100.0, 0.0, 0.0, 0.0),
        food("2025-01-04", 3000.0, 0.0, 0.0, 0.0),
    ];
    let agg = aggregate::aggregate_daily(&entries, &window);
    assert_eq!(agg.days.len(), 2);
    assert!(approx(agg.days[1].calories, 2100.0, 1e-9));
}

#[test]
fn test_invalid_entries_are_rejected_not_fatal() {
    let mut missing = food("", 500.0, 0.0, 0.0, 0.0);
    missing.id = "missing-date".to_string();
    let mut garbage = food("not a date", 500.0, 0.0, 0.0, 0.0);
    garbage.id = "garbage".to_string();
    let negative = LogEntry::new("x".into(), -10.0, "2025-01-01".into());
    let good = food("2025-01-01", 800.0, 0.0, 0.0, 0.0);

    let agg = aggregate::aggregate_daily(&[missing, garbage, negative, good], &PeriodWindow::All);

    assert_eq!(agg.days.len(), 1);
    assert!(approx(agg.days[0].calories, 800.0, 1e-9));
    assert_eq!(agg.rejected.len(), 3);
    assert!(matches!(
        &agg.rejected[0],
        AnalyticsError::InvalidEntry { id, .. } if id == "missing-date"
    ));
    assert!(matches!(
        &agg.rejected[1],
        AnalyticsError::InvalidEntry { id, reason } if id == "garbage" && reason.contains("unparsable")
    ));
}

#[test]
fn test_empty_input_gives_empty_output() {
    let agg = aggregate::aggregate_daily(&[], &PeriodWindow::All);
    assert!(agg.days.is_empty());
    assert!(aggregate::overall_stats(&agg.days).is_none());
}

#[test]
fn test_fill_gaps_is_dense_over_window() {
    let window = PeriodWindow::new(date(2025, 1, 1), date(2025, 1, 4)).unwrap();
    let entries = vec![food("2025-01-02", 1500.0, 0.0, 0.0, 0.0)];
    let agg = aggregate::aggregate_daily(&entries, &window);
    let dense = aggregate::fill_gaps(&agg.days, &window);

    assert_eq!(dense.len(), 4);
    assert_eq!(dense[0].calories, 0.0);
    assert_eq!(dense[0].entry_count, 0);
    assert!(approx(dense[1].calories, 1500.0, 1e-9));
    assert_eq!(dense[3].date, date(2025, 1, 4));
}

#[test]
fn test_fill_gaps_all_spans_logged_range() {
    let entries = vec![
        food("2025-01-01", 1000.0, 0.0, 0.0, 0.0),
        food("2025-01-03", 1000.0, 0.0, 0.0, 0.0),
    ];
    let agg = aggregate::aggregate_daily(&entries, &PeriodWindow::All);
    let dense = aggregate::fill_gaps(&agg.days, &PeriodWindow::All);
    assert_eq!(dense.len(), 3);
}

#[test]
fn test_overall_stats() {
    let entries = vec![
        food("2025-01-01", 1500.0, 100.0, 150.0, 50.0),
        food("2025-01-02", 2500.0, 140.0, 250.0, 90.0),
    ];
    let agg = aggregate::aggregate_daily(&entries, &PeriodWindow::All);
    let stats = aggregate::overall_stats(&agg.days).unwrap();

    assert_eq!(stats.total_days_logged, 2);
    assert!(approx(stats.avg_daily_calories, 2000.0, 1e-9));
    assert!(approx(stats.avg_daily_protein, 120.0, 1e-9));
    assert!(approx(stats.calorie_min, 1500.0, 1e-9));
    assert!(approx(stats.calorie_max, 2500.0, 1e-9));
    assert!(approx(stats.total_fat, 140.0, 1e-9));
}

#[test]
fn test_window_rejects_inverted_range() {
    let err = PeriodWindow::new(date(2025, 1, 5), date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, AnalyticsError::Precondition(_)));
}
