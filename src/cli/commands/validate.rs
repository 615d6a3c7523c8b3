//! Validate-config command implementation

use crate::config::load_config;
use crate::domain::ExtractionError;
use crate::extraction::PatternSchema;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loads and validates the configuration, then compiles whichever
    /// pattern library the configuration selects.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config = config_path, "Validating configuration");

        println!("🔎 Validating {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration valid");
        println!("  Input directory: {}", config.input.directory.display());
        println!("  Output directory: {}", config.output.directory.display());
        if let Some(branding) = &config.output.branding {
            println!("  Branding banner: {}", branding.display());
        }

        let schema = match &config.processing.pattern_library {
            Some(path) => {
                println!("  Pattern library: {}", path.display());
                PatternSchema::from_file(path)
                    .map_err(|e| ExtractionError::SchemaInvalid(format!("{e:#}")))
            }
            None => {
                println!("  Pattern library: built-in");
                PatternSchema::default_patterns()
                    .map_err(|e| ExtractionError::SchemaInvalid(format!("{e:#}")))
            }
        };

        match schema {
            Ok(schema) => {
                println!(
                    "✅ Pattern library compiled ({} sources, {} patterns)",
                    schema.sources().len(),
                    schema.pattern_count()
                );
                Ok(0)
            }
            Err(e) => {
                println!("❌ Pattern library invalid");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }
}
