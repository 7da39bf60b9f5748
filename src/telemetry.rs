use anyhow::{Result, bail};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::models::config::LoggingConfig;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Install the global subscriber. Output goes to stderr so stdout stays JSON.
///
/// `RUST_LOG` wins over the config file; `verbose` forces debug.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    if !LEVELS.contains(&level) {
        bail!("invalid log level: {} (expected one of {})", level, LEVELS.join(", "));
    }

    let filter = if verbose {
        EnvFilter::new(format!("healthlens={}", level))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("healthlens={}", level)))
    };

    let layer = match config.format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true)
            .boxed(),
        "pretty" => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .boxed(),
        other => bail!("invalid log format: {} (expected pretty or json)", other),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}
