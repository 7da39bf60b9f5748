pub mod achievements;
pub mod aggregate;
pub mod analytics;
pub mod breakdown;
pub mod compare;
pub mod logging;
pub mod macros;
pub mod pace;
pub mod reports;
pub mod score;
pub mod source;
pub mod streak;
pub mod units;
