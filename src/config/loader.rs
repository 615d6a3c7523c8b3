//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LabsumConfig;
use crate::domain::errors::LabsumError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LabsumConfig
/// 4. Applies environment variable overrides (LABSUM_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use labsum::config::load_config;
///
/// let config = load_config("labsum.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LabsumConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LabsumError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LabsumError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: LabsumConfig = toml::from_str(&contents)
        .map_err(|e| LabsumError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LabsumError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are passed through untouched so documentation examples
/// don't require the variables they mention.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let substituted = re.replace_all(line, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing_vars.push(var_name.to_string());
                    String::new()
                }
            }
        });

        result.push_str(&substituted);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LabsumError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies LABSUM_* environment variable overrides to the configuration
///
/// Supported overrides:
/// - `LABSUM_INPUT_DIR` → `input.directory`
/// - `LABSUM_OUTPUT_DIR` → `output.directory`
/// - `LABSUM_LOG_LEVEL` → `application.log_level`
/// - `LABSUM_PATTERN_LIBRARY` → `processing.pattern_library`
fn apply_env_overrides(config: &mut LabsumConfig) {
    if let Ok(dir) = std::env::var("LABSUM_INPUT_DIR") {
        tracing::debug!(directory = %dir, "Overriding input directory from environment");
        config.input.directory = PathBuf::from(dir);
    }

    if let Ok(dir) = std::env::var("LABSUM_OUTPUT_DIR") {
        tracing::debug!(directory = %dir, "Overriding output directory from environment");
        config.output.directory = PathBuf::from(dir);
    }

    if let Ok(level) = std::env::var("LABSUM_LOG_LEVEL") {
        config.application.log_level = level;
    }

    if let Ok(path) = std::env::var("LABSUM_PATTERN_LIBRARY") {
        config.processing.pattern_library = Some(PathBuf::from(path));
    }
}
