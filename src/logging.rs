//! File logging through `tracing`. The terminal owns stdout while the form
//! is open, so logs only ever go to disk.

use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "MOVIE_FORM_LOG";
const LOG_FILE: &str = "movie-form.log";

/// Installs the global subscriber writing a daily-rotated log file.
///
/// The level is taken from `MOVIE_FORM_LOG` (e.g. `MOVIE_FORM_LOG=debug`).
pub fn init(log_dir: Option<PathBuf>) -> Result<PathBuf> {
    let log_dir = log_dir.unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("movie_form=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))?;

    tracing::info!(log_dir = %log_dir.display(), "movie-form starting");
    Ok(log_dir)
}

pub fn default_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("movie-form").join("logs")
}
