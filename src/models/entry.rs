use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single food log entry as handed over by storage.
///
/// `date` is kept as the raw stored string (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`
/// or RFC 3339). The aggregator parses it and rejects entries it cannot read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: String,
    pub date: String,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl LogEntry {
    pub fn new(name: String, calories: f64, date: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            name,
            calories,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
        }
    }

    pub fn with_macros(mut self, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.protein_g = protein_g;
        self.carbs_g = carbs_g;
        self.fat_g = fat_g;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    pub fn new(weight_kg: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recorded_at,
            weight_kg,
            note: None,
        }
    }

    /// Calendar date of the weigh-in in the local timezone.
    pub fn local_date(&self) -> NaiveDate {
        self.recorded_at.with_timezone(&Local).date_naive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
    pub duration_min: u32,
}

impl WorkoutSession {
    pub fn new(name: String, duration_min: u32, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            name,
            duration_min,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunningSession {
    pub id: String,
    pub date: NaiveDate,
    pub distance_km: f64,
    pub duration_min: u32,
}

impl RunningSession {
    pub fn new(distance_km: f64, duration_min: u32, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            distance_km,
            duration_min,
        }
    }

    /// Minutes per kilometre, absent for zero-distance sessions.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        if self.distance_km > 0.0 {
            Some(self.duration_min as f64 / self.distance_km)
        } else {
            None
        }
    }
}

/// Number of training sessions inside one window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionCounts {
    pub workouts: u32,
    pub runs: u32,
}
