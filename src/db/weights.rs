use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use rusqlite::params;

use crate::models::{PeriodWindow, WeightEntry};

use super::Database;

struct WeightRow {
    id: String,
    recorded_at: String,
    weight_kg: f64,
    note: Option<String>,
}

/// Start of the local calendar day `date`, as a stored UTC timestamp.
fn local_day_start(date: NaiveDate) -> String {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
        .to_rfc3339()
}

/// Half-open `[from, to)` timestamp bounds covering the local dates of `window`.
fn local_bounds(window: &PeriodWindow) -> (String, String) {
    match window {
        PeriodWindow::Range { start, end } => {
            let to = end
                .succ_opt()
                .map_or_else(|| "9999".to_string(), local_day_start);
            (local_day_start(*start), to)
        }
        PeriodWindow::All => ("0000".to_string(), "9999".to_string()),
    }
}

fn row_to_entry(r: WeightRow) -> Result<WeightEntry> {
    let recorded_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.recorded_at)?.with_timezone(&Utc);
    Ok(WeightEntry {
        id: r.id,
        recorded_at,
        weight_kg: r.weight_kg,
        note: r.note,
    })
}

impl Database {
    pub fn insert_weight(&self, e: &WeightEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO weight_entries (id, recorded_at, weight_kg, note)
             VALUES (?1, ?2, ?3, ?4)",
            params![e.id, e.recorded_at.to_rfc3339(), e.weight_kg, e.note],
        )?;
        Ok(())
    }

    /// Weight entries recorded on a local date inside `window`, ascending by `recorded_at`.
    pub fn query_weights(&self, window: &PeriodWindow) -> Result<Vec<WeightEntry>> {
        let (from, to) = local_bounds(window);
        let mut stmt = self.conn.prepare(
            "SELECT id, recorded_at, weight_kg, note
             FROM weight_entries WHERE recorded_at >= ?1 AND recorded_at < ?2
             ORDER BY recorded_at",
        )?;
        let rows = stmt.query_map(params![from, to], |row| {
            Ok(WeightRow {
                id: row.get(0)?,
                recorded_at: row.get(1)?,
                weight_kg: row.get(2)?,
                note: row.get(3)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row_to_entry(row?)?);
        }
        Ok(entries)
    }

    pub fn latest_weight(&self) -> Result<Option<WeightEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, recorded_at, weight_kg, note
             FROM weight_entries ORDER BY recorded_at DESC LIMIT 1",
        )?;
        let mut rows = stmt.query_map([], |row| {
            Ok(WeightRow {
                id: row.get(0)?,
                recorded_at: row.get(1)?,
                weight_kg: row.get(2)?,
                note: row.get(3)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_entry(row?)?)),
            None => Ok(None),
        }
    }
}
