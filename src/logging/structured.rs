//! Structured logging setup using tracing
//!
//! Console output is always enabled; a rotating JSON file layer is added
//! when the configuration asks for it.

use crate::config::LoggingConfig;
use crate::domain::{LabsumError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program
/// to ensure logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the logging system based on configuration
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
/// * `config` - Logging configuration
///
/// # Returns
///
/// A `LoggingGuard` that must be kept alive for the duration of the program
///
/// # Errors
///
/// Returns an error when the log level string is invalid or the log
/// directory cannot be created.
pub fn init_logging(log_level_str: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("labsum={log_level}")));

    let mut layers = Vec::new();

    // Console layer (always enabled)
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter);

    layers.push(console_layer.boxed());

    // File logging layer (if enabled)
    let file_guard = if config.local_enabled {
        let rotation = match config.local_rotation.as_str() {
            "hourly" => Rotation::HOURLY,
            _ => Rotation::DAILY,
        };

        std::fs::create_dir_all(&config.local_path).map_err(|e| {
            LabsumError::Configuration(format!(
                "Failed to create log directory {}: {}",
                config.local_path, e
            ))
        })?;

        let file_appender = RollingFileAppender::new(rotation, &config.local_path, "labsum.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_filter(EnvFilter::new(format!("labsum={log_level}")));

        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry().with(layers).try_init().ok();

    Ok(LoggingGuard::new(file_guard))
}

/// Resolve the log level and logging configuration before command dispatch
///
/// The `[logging]` section lives in the configuration file, so it has to be
/// read ahead of the command's own configuration handling for the file
/// layer to cover the whole run. A CLI-supplied level wins over the
/// configured one. An unreadable configuration falls back to console-only
/// defaults here; the command reports the problem itself.
pub fn bootstrap(config_path: &str, cli_level: Option<&str>) -> (String, LoggingConfig) {
    match crate::config::load_config(config_path) {
        Ok(config) => (
            cli_level
                .map(str::to_string)
                .unwrap_or(config.application.log_level),
            config.logging,
        ),
        Err(_) => (
            cli_level.unwrap_or("info").to_string(),
            LoggingConfig::default(),
        ),
    }
}

/// Parse a log level string into a tracing Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(LabsumError::Configuration(format!(
            "Invalid log level: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_bootstrap_reads_logging_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labsum.toml");
        fs::write(
            &path,
            r#"
            [application]
            log_level = "debug"

            [logging]
            local_enabled = true
            local_path = "./batch-logs"
            local_rotation = "hourly"
            "#,
        )
        .unwrap();

        let (level, config) = bootstrap(path.to_str().unwrap(), None);
        assert_eq!(level, "debug");
        assert!(config.local_enabled);
        assert_eq!(config.local_path, "./batch-logs");
        assert_eq!(config.local_rotation, "hourly");
    }

    #[test]
    fn test_bootstrap_cli_level_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labsum.toml");
        fs::write(&path, "[application]\nlog_level = \"debug\"\n").unwrap();

        let (level, _) = bootstrap(path.to_str().unwrap(), Some("trace"));
        assert_eq!(level, "trace");
    }

    #[test]
    fn test_bootstrap_missing_config_falls_back_to_defaults() {
        let (level, config) = bootstrap("/nonexistent/labsum.toml", None);
        assert_eq!(level, "info");
        assert!(!config.local_enabled);
    }

    #[test]
    fn test_parse_log_level_valid() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("Warn").unwrap(), Level::WARN);
    }

    #[test]
    fn test_parse_log_level_invalid() {
        assert!(parse_log_level("verbose").is_err());
        assert!(parse_log_level("").is_err());
    }

    #[test]
    fn test_init_logging_console_only() {
        let config = LoggingConfig::default();
        // try_init is used internally, so repeated initialization in the
        // test binary must not fail
        let guard = init_logging("info", &config);
        assert!(guard.is_ok());
    }
}
