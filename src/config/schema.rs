//! Configuration schema types
//!
//! This module defines the configuration structure for Labsum. Folder
//! names and the branding asset are explicit configuration values passed
//! into the batch driver and renderer, never ambient process-wide state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Labsum configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LabsumConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Input document discovery settings
    #[serde(default)]
    pub input: InputConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Pipeline behavior settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LabsumConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.processing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("application.name cannot be empty".to_string());
        }
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "application.log_level must be one of trace, debug, info, warn, error (got '{other}')"
            )),
        }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Input document discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory scanned for input documents
    #[serde(default = "default_input_dir")]
    pub directory: PathBuf,
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.as_os_str().is_empty() {
            return Err("input.directory cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directory: default_input_dir(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where summary reports are written
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// Optional branding banner file prepended to each report
    ///
    /// A missing banner is logged and skipped; it never fails a document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<PathBuf>,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.as_os_str().is_empty() {
            return Err("output.directory cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            branding: None,
        }
    }
}

/// Pipeline behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProcessingConfig {
    /// Evaluate everything but write no reports
    #[serde(default)]
    pub dry_run: bool,

    /// Skip documents whose extraction found nothing instead of writing a
    /// placeholder report
    #[serde(default)]
    pub skip_empty: bool,

    /// Optional external pattern library overriding the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_library: Option<PathBuf>,
}

impl ProcessingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.pattern_library {
            if path.as_os_str().is_empty() {
                return Err("processing.pattern_library cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging with rotation
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "logging.local_rotation must be 'daily' or 'hourly' (got '{other}')"
            )),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "labsum".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("inbox")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LabsumConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.directory, PathBuf::from("inbox"));
        assert_eq!(config.output.directory, PathBuf::from("reports"));
        assert!(!config.processing.dry_run);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = LabsumConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_input_directory_rejected() {
        let mut config = LabsumConfig::default();
        config.input.directory = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = LabsumConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_toml_parses_with_defaults() {
        let config: LabsumConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.name, "labsum");
    }

    #[test]
    fn test_full_toml_parses() {
        let toml = r#"
            [application]
            name = "labsum"
            log_level = "debug"

            [input]
            directory = "incoming"

            [output]
            directory = "out"
            branding = "banner.txt"

            [processing]
            dry_run = true
            skip_empty = true

            [logging]
            local_enabled = true
            local_path = "./logs"
            local_rotation = "hourly"
        "#;
        let config: LabsumConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.directory, PathBuf::from("incoming"));
        assert!(config.processing.dry_run);
        assert_eq!(config.output.branding, Some(PathBuf::from("banner.txt")));
    }
}
