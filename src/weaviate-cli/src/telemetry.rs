//! Logging setup for the command line client
//!
//! - JSON formatted logs to file, rotated daily or at 10MB
//! - Human-readable console output on stderr, so stdout stays pure JSON

use anyhow::Result;
use rolling_file::{RollingConditionBasic, RollingFileAppender};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "weaviate_cli=info,weaviate_rs=info";

/// Initialize file and console logging
///
/// Returns a guard that must be kept alive to ensure logs are flushed
pub fn init_telemetry(log_dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    // weaviate-cli.log, weaviate-cli.log.1, ... up to 10 files
    let file_appender = RollingFileAppender::new(
        log_dir.join("weaviate-cli.log"),
        RollingConditionBasic::new()
            .daily()
            .max_size(10 * 1024 * 1024),
        9,
    )?;

    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("weaviate_cli=debug,weaviate_rs=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let file_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_current_span(true)
        .with_target(true)
        .with_thread_ids(true);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    tracing::debug!("Logging to {:?}", log_dir);

    Ok(guard)
}
