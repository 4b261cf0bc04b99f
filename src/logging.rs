// Logging setup
//
// The terminal belongs to the UI, so events only ever go to a file.
// Precedence for the filter: PMN_LOG env var > --log-level > config file.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::{LOG_ENV_VAR, LOG_FILE_NAME};

/// Builds the filter from the environment or the configured level.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber.
///
/// Returns the guard of the background writer; it must live until exit so
/// buffered lines are flushed. Returns None when file logging is off, in
/// which case no subscriber is installed and events are discarded.
pub fn init(config: &LoggingConfig, level_override: Option<&str>) -> Result<Option<WorkerGuard>> {
    if !config.file {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.dir)
        .with_context(|| format!("could not create log directory {}", config.dir.display()))?;

    let level = level_override.unwrap_or(&config.level);
    let file_appender = tracing_appender::rolling::never(&config.dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .context("could not install the log subscriber")?;

    Ok(Some(guard))
}
