mod common;

use std::collections::HashSet;

use healthlens::core::streak::compute_streaks;

use common::date;

fn dates(days: &[(i32, u32, u32)]) -> HashSet<chrono::NaiveDate> {
    days.iter().map(|&(y, m, d)| date(y, m, d)).collect()
}

#[test]
fn test_gap_breaks_current_streak() {
    let set = dates(&[(2025, 1, 1), (2025, 1, 2), (2025, 1, 4), (2025, 1, 5)]);
    let s = compute_streaks(&set, date(2025, 1, 5));
    assert_eq!(s.current_streak, 2);
    assert_eq!(s.longest_streak, 2);
    assert_eq!(s.total_days_logged, 4);
}

#[test]
fn test_current_streak_counts_from_yesterday_when_today_missing() {
    let set = dates(&[(2025, 1, 1), (2025, 1, 2), (2025, 1, 3)]);
    let s = compute_streaks(&set, date(2025, 1, 4));
    assert_eq!(s.current_streak, 3);
    assert_eq!(s.longest_streak, 3);
}

#[test]
fn test_current_streak_zero_after_two_missed_days() {
    let set = dates(&[(2025, 1, 1), (2025, 1, 2)]);
    let s = compute_streaks(&set, date(2025, 1, 5));
    assert_eq!(s.current_streak, 0);
    assert_eq!(s.longest_streak, 2);
}

#[test]
fn test_longest_streak_in_the_past() {
    let set = dates(&[
        (2025, 1, 1),
        (2025, 1, 2),
        (2025, 1, 3),
        (2025, 1, 4),
        (2025, 1, 10),
    ]);
    let s = compute_streaks(&set, date(2025, 1, 10));
    assert_eq!(s.current_streak, 1);
    assert_eq!(s.longest_streak, 4);
}

#[test]
fn test_empty_set() {
    let s = compute_streaks(&HashSet::new(), date(2025, 1, 10));
    assert_eq!(s.current_streak, 0);
    assert_eq!(s.longest_streak, 0);
    assert_eq!(s.total_days_logged, 0);
    assert_eq!(s.consistency_rate, None);
}

#[test]
fn test_consistency_rate() {
    // 4 logged days out of 5 since the first log
    let set = dates(&[(2025, 1, 1), (2025, 1, 2), (2025, 1, 4), (2025, 1, 5)]);
    let s = compute_streaks(&set, date(2025, 1, 5));
    assert!((s.consistency_rate.unwrap() - 80.0).abs() < 1e-9);
}
