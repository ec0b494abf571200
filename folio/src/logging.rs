//! Log setup. The TUI owns the terminal, so events go to a file.

use std::error::Error;
use std::fs;

use folio_core::FolioConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const LOG_FILE_NAME: &str = "folio.log";

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
/// `stderr_warnings` mirrors warnings to stderr, for headless runs.
pub fn init_tracing(
    config: &FolioConfig,
    stderr_warnings: bool,
) -> Result<WorkerGuard, Box<dyn Error>> {
    fs::create_dir_all(&config.log_dir).map_err(|e| {
        format!(
            "failed to create log directory {}: {e}",
            config.log_dir.display()
        )
    })?;

    let appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| format!("invalid log filter '{}': {e}", config.log_filter))?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .with_filter(env_filter);

    let stderr_layer = stderr_warnings.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::info!(
        dir = %config.log_dir.display(),
        filter = %config.log_filter,
        "logging initialized"
    );

    Ok(guard)
}
