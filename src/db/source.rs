use anyhow::Result;

use crate::core::source::EntrySource;
use crate::models::config::Config;
use crate::models::{LogEntry, PeriodWindow, Profile, SessionCounts, WeightEntry};

use super::Database;

/// Entries read from the local SQLite store, profile from the config file.
pub struct LocalStore<'a> {
    pub db: &'a Database,
    pub config: &'a Config,
}

impl<'a> LocalStore<'a> {
    pub fn new(db: &'a Database, config: &'a Config) -> Self {
        Self { db, config }
    }
}

impl EntrySource for LocalStore<'_> {
    fn fetch_daily_logs(&self, window: &PeriodWindow) -> Result<Vec<LogEntry>> {
        self.db.query_food(window)
    }

    fn fetch_weight_entries(&self, window: &PeriodWindow) -> Result<Vec<WeightEntry>> {
        self.db.query_weights(window)
    }

    fn fetch_session_counts(&self, window: &PeriodWindow) -> Result<SessionCounts> {
        self.db.count_sessions(window)
    }

    /// The configured profile; a missing weight falls back to the latest weigh-in.
    fn fetch_profile(&self) -> Result<Profile> {
        let mut profile = self.config.profile.clone();
        if profile.current_weight_kg.is_none() {
            profile.current_weight_kg = self.db.latest_weight()?.map(|w| w.weight_kg);
        }
        Ok(profile)
    }
}
