pub mod config;
pub mod entry;
pub mod profile;
pub mod window;

pub use entry::{LogEntry, RunningSession, SessionCounts, WeightEntry, WorkoutSession};
pub use profile::{ActivityLevel, FitnessGoal, Gender, Profile};
pub use window::PeriodWindow;
