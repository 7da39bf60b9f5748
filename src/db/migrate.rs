use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS food_entries (
            id         TEXT PRIMARY KEY,
            date       TEXT NOT NULL,
            name       TEXT NOT NULL,
            calories   REAL NOT NULL,
            protein_g  REAL NOT NULL DEFAULT 0,
            carbs_g    REAL NOT NULL DEFAULT 0,
            fat_g      REAL NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_food_date ON food_entries(date);

        CREATE TABLE IF NOT EXISTS weight_entries (
            id           TEXT PRIMARY KEY,
            recorded_at  TEXT NOT NULL,
            weight_kg    REAL NOT NULL,
            note         TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_weight_ts ON weight_entries(recorded_at);

        CREATE TABLE IF NOT EXISTS workouts (
            id            TEXT PRIMARY KEY,
            date          TEXT NOT NULL,
            name          TEXT NOT NULL,
            duration_min  INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date);

        CREATE TABLE IF NOT EXISTS runs (
            id            TEXT PRIMARY KEY,
            date          TEXT NOT NULL,
            distance_km   REAL NOT NULL,
            duration_min  INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_runs_date ON runs(date);",
    )?;
    Ok(())
}
