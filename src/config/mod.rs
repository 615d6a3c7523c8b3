//! Configuration management
//!
//! TOML-based configuration with environment variable substitution and
//! `LABSUM_*` overrides.

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, InputConfig, LabsumConfig, LoggingConfig, OutputConfig, ProcessingConfig,
};
