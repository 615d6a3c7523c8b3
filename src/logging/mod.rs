//! Logging and observability
//!
//! This module provides structured logging with configurable log levels,
//! console output, and optional rotating JSON file logging.
//!
//! # Example
//!
//! ```no_run
//! use labsum::logging::init_logging;
//! use labsum::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{bootstrap, init_logging, LoggingGuard};
