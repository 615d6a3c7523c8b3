//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "labsum.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Labsum configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Place lab-report documents in the input directory");
                println!("  3. Run 'labsum validate-config' to check the setup");
                println!("  4. Run 'labsum process' to generate summary reports");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to create configuration file: {e}");
                Ok(5)
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# Labsum configuration

[application]
name = "labsum"
# trace, debug, info, warn, error
log_level = "info"

[input]
# Directory scanned for lab-report documents
directory = "inbox"

[output]
# Directory where anonymized summary reports are written
directory = "reports"
# Optional branding banner prepended to every report.
# A missing banner is skipped, never fatal.
# branding = "banner.txt"

[processing]
# Evaluate documents without writing reports
dry_run = false
# Skip documents where extraction found no fields instead of writing a
# placeholder report
skip_empty = false
# Optional external pattern library overriding the built-in one.
# pattern_library = "patterns/lab_patterns.toml"

[logging]
# Enable rotating JSON file logs in addition to console output
local_enabled = false
local_path = "./logs"
# daily or hourly
local_rotation = "daily"
"#
    }
}
