use anyhow::Result;
use rusqlite::params;

use crate::models::{LogEntry, PeriodWindow};

use super::{Database, window_bounds};

impl Database {
    pub fn insert_food(&self, e: &LogEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO food_entries (id, date, name, calories, protein_g, carbs_g, fat_g)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                e.id,
                e.date,
                e.name,
                e.calories,
                e.protein_g,
                e.carbs_g,
                e.fat_g,
            ],
        )?;
        Ok(())
    }

    /// Food entries whose stored date falls inside `window`, oldest first.
    pub fn query_food(&self, window: &PeriodWindow) -> Result<Vec<LogEntry>> {
        let (from, to) = window_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT id, date, name, calories, protein_g, carbs_g, fat_g
             FROM food_entries WHERE date >= ?1 AND date < ?2 ORDER BY date",
        )?;
        let rows = stmt.query_map(params![from, to], |row| {
            Ok(LogEntry {
                id: row.get(0)?,
                date: row.get(1)?,
                name: row.get(2)?,
                calories: row.get(3)?,
                protein_g: row.get(4)?,
                carbs_g: row.get(5)?,
                fat_g: row.get(6)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}
