//! Logging configuration using tracing.
//!
//! The dashboard owns the terminal, so nothing is written to stdout/stderr
//! while it runs. Logs go to a daily-rolling file instead.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "crmdash.log";

/// Initialize the logging subsystem.
///
/// Logs are written to `<data_local_dir>/crmdash/logs/`. The level is
/// controlled by the `CRMDASH_LOG` environment variable:
///
/// ```bash
/// CRMDASH_LOG=debug crmdash
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("CRMDASH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("crmdash=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("crmdash {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("log directory: {}", log_dir.display());

    Ok(log_dir)
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("crmdash").join("logs")
}
