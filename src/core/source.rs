use anyhow::Result;

use crate::models::{
    LogEntry, PeriodWindow, Profile, RunningSession, SessionCounts, WeightEntry, WorkoutSession,
};

/// Read-only access to the raw entries the engine computes over.
///
/// Each call returns a fresh snapshot; the engine never caches across calls.
pub trait EntrySource {
    fn fetch_daily_logs(&self, window: &PeriodWindow) -> Result<Vec<LogEntry>>;

    /// Weight entries whose local date is inside `window`, sorted ascending by `recorded_at`.
    fn fetch_weight_entries(&self, window: &PeriodWindow) -> Result<Vec<WeightEntry>>;

    fn fetch_session_counts(&self, window: &PeriodWindow) -> Result<SessionCounts>;

    fn fetch_profile(&self) -> Result<Profile>;
}

/// An in-memory, immutable set of entries.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub logs: Vec<LogEntry>,
    pub weights: Vec<WeightEntry>,
    pub workouts: Vec<WorkoutSession>,
    pub runs: Vec<RunningSession>,
    pub profile: Profile,
}

impl EntrySource for Snapshot {
    /// Returns every log entry; unparsable dates are left for the aggregator to reject.
    fn fetch_daily_logs(&self, _window: &PeriodWindow) -> Result<Vec<LogEntry>> {
        Ok(self.logs.clone())
    }

    fn fetch_weight_entries(&self, window: &PeriodWindow) -> Result<Vec<WeightEntry>> {
        let mut weights: Vec<WeightEntry> = self
            .weights
            .iter()
            .filter(|w| window.contains(w.local_date()))
            .cloned()
            .collect();
        weights.sort_by_key(|w| w.recorded_at);
        Ok(weights)
    }

    fn fetch_session_counts(&self, window: &PeriodWindow) -> Result<SessionCounts> {
        Ok(SessionCounts {
            workouts: self.workouts.iter().filter(|w| window.contains(w.date)).count() as u32,
            runs: self.runs.iter().filter(|r| window.contains(r.date)).count() as u32,
        })
    }

    fn fetch_profile(&self) -> Result<Profile> {
        Ok(self.profile.clone())
    }
}
