//! Tracing subscriber setup

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "VETRETIRE_LOG";

/// Pick the effective level: `--quiet` wins over `--verbose`, both win over config.
#[must_use]
pub fn effective_level(config: &LoggingConfig, quiet: bool, verbose: bool) -> String {
    if quiet {
        "error".to_string()
    } else if verbose {
        "debug".to_string()
    } else {
        config.level.clone()
    }
}

/// Install the global tracing subscriber.
pub fn init(config: &LoggingConfig, quiet: bool, verbose: bool) -> Result<()> {
    let level = effective_level(config, quiet, verbose);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
