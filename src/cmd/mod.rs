pub mod analytics;
pub mod compare;
pub mod completions;
pub mod config;
pub mod daily;
pub mod init;
pub mod log;
pub mod macros;
pub mod pace;
pub mod score;
pub mod streak;
