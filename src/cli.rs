use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "healthlens", version, about = "Nutrition, weight and training analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Log food, weight, a workout or a run
    Log {
        #[command(subcommand)]
        entry: LogCommand,
    },

    /// Daily calorie and macro totals
    Daily {
        /// Day count or "all"
        #[arg(long, default_value = "7")]
        period: String,

        /// Include days without entries as zero rows
        #[arg(long)]
        fill: bool,
    },

    /// Current and longest logging streaks
    Streak,

    /// Compare the last N days with the N days before
    Compare {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },

    /// Weight change rate and projections
    Pace {
        /// Day count or "all"
        #[arg(long, default_value = "30")]
        period: String,
    },

    /// Recommended calories and macros from the profile
    Macros,

    /// Consistency and nutrition scores
    Score {
        /// Day count or "all"
        #[arg(long, default_value = "30")]
        period: String,
    },

    /// Full analytics report
    Analytics {
        /// Day count or "all"
        #[arg(long, default_value = "30")]
        period: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum LogCommand {
    /// Food entry with calories and optional macros (grams)
    Food {
        name: String,
        calories: f64,
        #[arg(long, default_value_t = 0.0)]
        protein: f64,
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,
        #[arg(long, default_value_t = 0.0)]
        fat: f64,
    },
    /// Weigh-in, in the configured unit system
    Weight {
        value: f64,
        #[arg(long)]
        note: Option<String>,
    },
    /// Training session
    Workout {
        name: String,
        /// Minutes
        #[arg(long, default_value_t = 60)]
        duration: u32,
    },
    /// Run
    Run {
        /// Kilometres
        distance: f64,
        /// Minutes
        #[arg(long)]
        duration: u32,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. age, weight, goal, targets.calories)
        key: String,
        /// Config value
        value: String,
    },
}
