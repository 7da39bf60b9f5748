mod cli;
mod cmd;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, LogCommand};
use std::process;

use healthlens::models::config::Config;
use healthlens::{output, telemetry};

fn main() {
    let cli = Cli::parse();
    let command = command_name(&cli.command);

    if let Err(e) = run(cli) {
        let err = output::error(command, "general_error", &format!("{:#}", e));
        match serde_json::to_string(&err) {
            Ok(s) => eprintln!("{}", s),
            Err(_) => eprintln!("error: {:#}", e),
        }
        process::exit(1);
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Log { .. } => "log",
        Commands::Daily { .. } => "daily",
        Commands::Streak => "streak",
        Commands::Compare { .. } => "compare",
        Commands::Pace { .. } => "pace",
        Commands::Macros => "macros",
        Commands::Score { .. } => "score",
        Commands::Analytics { .. } => "analytics",
        Commands::Config { .. } => "config",
        Commands::Completions { .. } => "completions",
    }
}

fn run(cli: Cli) -> Result<()> {
    let logging = Config::load().map(|c| c.logging).unwrap_or_default();
    telemetry::init(&logging, cli.verbose)?;

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let human = cli.human;

    match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Log { entry } => match entry {
            LogCommand::Food {
                name,
                calories,
                protein,
                carbs,
                fat,
            } => cmd::log::run_food(&name, calories, (protein, carbs, fat), cli.date, human),
            LogCommand::Weight { value, note } => {
                cmd::log::run_weight(value, note.as_deref(), cli.date, human)
            }
            LogCommand::Workout { name, duration } => {
                cmd::log::run_workout(&name, duration, cli.date, human)
            }
            LogCommand::Run { distance, duration } => {
                cmd::log::run_run(distance, duration, cli.date, human)
            }
        },
        Commands::Daily { period, fill } => cmd::daily::run(&period, fill, today, human),
        Commands::Streak => cmd::streak::run(today, human),
        Commands::Compare { days } => cmd::compare::run(days, today, human),
        Commands::Pace { period } => cmd::pace::run(&period, today, human),
        Commands::Macros => cmd::macros::run(human),
        Commands::Score { period } => cmd::score::run(&period, today, human),
        Commands::Analytics { period } => cmd::analytics::run(&period, today, human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    }
}
