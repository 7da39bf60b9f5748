use anyhow::Result;
use rusqlite::params;

use crate::models::{PeriodWindow, RunningSession, SessionCounts, WorkoutSession};

use super::{Database, window_bounds};

impl Database {
    pub fn insert_workout(&self, w: &WorkoutSession) -> Result<()> {
        self.conn.execute(
            "INSERT INTO workouts (id, date, name, duration_min) VALUES (?1, ?2, ?3, ?4)",
            params![w.id, w.date.to_string(), w.name, w.duration_min],
        )?;
        Ok(())
    }

    pub fn insert_run(&self, r: &RunningSession) -> Result<()> {
        self.conn.execute(
            "INSERT INTO runs (id, date, distance_km, duration_min) VALUES (?1, ?2, ?3, ?4)",
            params![r.id, r.date.to_string(), r.distance_km, r.duration_min],
        )?;
        Ok(())
    }

    pub fn count_sessions(&self, window: &PeriodWindow) -> Result<SessionCounts> {
        let (from, to) = window_bounds(window);
        let workouts: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM workouts WHERE date >= ?1 AND date < ?2",
            params![from, to],
            |row| row.get(0),
        )?;
        let runs: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM runs WHERE date >= ?1 AND date < ?2",
            params![from, to],
            |row| row.get(0),
        )?;
        Ok(SessionCounts { workouts, runs })
    }
}
