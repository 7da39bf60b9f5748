use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::{AnalyticsError, Result};

/// Closed date range an analytics request is scoped to, or every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodWindow {
    Range { start: NaiveDate, end: NaiveDate },
    All,
}

impl PeriodWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AnalyticsError::Precondition(format!(
                "window start {} is after end {}",
                start, end
            )));
        }
        Ok(Self::Range { start, end })
    }

    /// The `days` most recent dates ending at (and including) `today`.
    pub fn last_days(today: NaiveDate, days: u32) -> Result<Self> {
        if days == 0 {
            return Err(AnalyticsError::Precondition(
                "window must span at least one day".to_string(),
            ));
        }
        let start = today
            .checked_sub_signed(Duration::days(days as i64 - 1))
            .ok_or_else(out_of_range)?;
        Self::new(start, today)
    }

    /// Parse a request period: a positive day count (`"30"`) or `"all"`.
    pub fn from_period(period: &str, today: NaiveDate) -> anyhow::Result<Self> {
        if period == "all" {
            return Ok(Self::All);
        }
        let days: u32 = period
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid period: {} (expected day count or 'all')", period))?;
        Ok(Self::last_days(today, days)?)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::Range { start, end } => *start <= date && date <= *end,
            Self::All => true,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::Range { start, .. } => Some(*start),
            Self::All => None,
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Self::Range { end, .. } => Some(*end),
            Self::All => None,
        }
    }

    /// Number of calendar days covered, inclusive. `None` for `All`.
    pub fn len_days(&self) -> Option<i64> {
        match self {
            Self::Range { start, end } => Some((*end - *start).num_days() + 1),
            Self::All => None,
        }
    }

    /// The equal-length window ending the day before this one starts.
    ///
    /// `Ok(None)` for `All`; an error when the earlier window would fall
    /// before the first representable date.
    pub fn preceding(&self) -> Result<Option<Self>> {
        match self {
            Self::Range { start, end } => {
                let len = (*end - *start).num_days() + 1;
                let prev_end = start.pred_opt().ok_or_else(out_of_range)?;
                let prev_start = prev_end
                    .checked_sub_signed(Duration::days(len - 1))
                    .ok_or_else(out_of_range)?;
                Ok(Some(Self::Range {
                    start: prev_start,
                    end: prev_end,
                }))
            }
            Self::All => Ok(None),
        }
    }

    /// True when `self` ends the day before `next` starts and both have equal length.
    pub fn is_adjacent_before(&self, next: &Self) -> bool {
        match (self, next) {
            (Self::Range { end, .. }, Self::Range { start, .. }) => {
                end.succ_opt() == Some(*start) && self.len_days() == next.len_days()
            }
            _ => false,
        }
    }

    /// Every date in a bounded window, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            Self::Range { start, end } => start.iter_days().take_while(|d| d <= end).collect(),
            Self::All => Vec::new(),
        }
    }
}

fn out_of_range() -> AnalyticsError {
    AnalyticsError::Precondition("window out of date range".to_string())
}

impl std::fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range { start, end } => write!(f, "{} to {}", start, end),
            Self::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_preceding_is_adjacent_and_equal_length() {
        let w = PeriodWindow::new(d(2025, 1, 8), d(2025, 1, 14)).unwrap();
        let prev = w.preceding().unwrap().unwrap();
        assert_eq!(prev, PeriodWindow::new(d(2025, 1, 1), d(2025, 1, 7)).unwrap());
        assert!(prev.is_adjacent_before(&w));
        assert!(!w.is_adjacent_before(&prev));
    }

    #[test]
    fn test_last_days_includes_today() {
        let w = PeriodWindow::last_days(d(2025, 3, 10), 7).unwrap();
        assert_eq!(w.start(), Some(d(2025, 3, 4)));
        assert_eq!(w.len_days(), Some(7));
        assert_eq!(w.dates().len(), 7);
    }

    #[test]
    fn test_inverted_window_is_precondition_error() {
        let err = PeriodWindow::new(d(2025, 2, 1), d(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, AnalyticsError::Precondition(_)));
    }

    #[test]
    fn test_from_period_parses_all_and_counts() {
        let today = d(2025, 6, 30);
        assert_eq!(PeriodWindow::from_period("all", today).unwrap(), PeriodWindow::All);
        assert_eq!(
            PeriodWindow::from_period("30", today).unwrap().len_days(),
            Some(30)
        );
        assert!(PeriodWindow::from_period("soon", today).is_err());
        assert!(PeriodWindow::from_period("0", today).is_err());
    }

    #[test]
    fn test_huge_day_counts_are_precondition_errors() {
        let today = d(2025, 1, 5);
        let err = PeriodWindow::from_period("1000000000", today).unwrap_err();
        assert!(err.to_string().contains("window out of date range"));

        let err = PeriodWindow::last_days(today, u32::MAX).unwrap_err();
        assert!(matches!(err, AnalyticsError::Precondition(_)));

        // fits once, but not twice
        let w = PeriodWindow::last_days(today, 90_000_000).unwrap();
        assert!(matches!(w.preceding(), Err(AnalyticsError::Precondition(_))));
    }

    #[test]
    fn test_all_has_no_preceding_window() {
        assert_eq!(PeriodWindow::All.preceding().unwrap(), None);
    }
}
