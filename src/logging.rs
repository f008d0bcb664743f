//! Tracing subscriber setup
//!
//! Stdout carries the gate's report, so logs go to stderr or, when
//! `log.file` is enabled, to [`crate::config::log_path`] as JSON lines.
//! `RUST_LOG` overrides the configured level.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_LEVEL, LogConfig};

/// Install the global subscriber.
///
/// Returns the appender guard when logging to a file; keep it alive until
/// exit so buffered lines are flushed.
pub fn init(config: &LogConfig, log_path: &Path) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env_filter(config);

    if !config.file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(anyhow::Error::msg)?;
        return Ok(None);
    }

    let (dir, file_name) = match (log_path.parent(), log_path.file_name()) {
        (Some(dir), Some(file_name)) => (dir, file_name),
        _ => anyhow::bail!("Invalid log path: {:?}", log_path),
    };
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    Ok(Some(guard))
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    build_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        &config.level,
    )
}

/// Env directives win over the configured level; unparseable input falls through
fn build_filter(env_directives: Option<&str>, level: &str) -> EnvFilter {
    env_directives
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
