//! Process command implementation
//!
//! This module implements the `process` command: the full batch pipeline
//! from input documents to rendered summary reports.

use crate::config::load_config;
use crate::core::BatchDriver;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Override input directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dry run mode - evaluate documents without writing reports
    #[arg(long)]
    pub dry_run: bool,

    /// Skip documents whose extraction found no fields
    #[arg(long)]
    pub skip_empty: bool,

    /// Override pattern library file
    #[arg(long, value_name = "FILE")]
    pub patterns: Option<PathBuf>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting process command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(input) = &self.input {
            tracing::info!(directory = %input.display(), "Overriding input directory from CLI");
            config.input.directory = input.clone();
        }

        if let Some(output) = &self.output {
            tracing::info!(directory = %output.display(), "Overriding output directory from CLI");
            config.output.directory = output.clone();
        }

        if let Some(patterns) = &self.patterns {
            tracing::info!(file = %patterns.display(), "Overriding pattern library from CLI");
            config.processing.pattern_library = Some(patterns.clone());
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.processing.dry_run = true;
        }

        if self.skip_empty {
            config.processing.skip_empty = true;
        }

        if config.processing.dry_run {
            println!("🔍 DRY RUN MODE - No reports will be written");
            println!();
        }

        // Build and run the batch
        let driver = match BatchDriver::new(&config) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Failed to initialize pipeline: {e}");
                return Ok(2);
            }
        };

        println!("🚀 Processing documents in {}...", config.input.directory.display());
        println!();

        let summary = match driver.run() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Batch failed: {e}");
                return Ok(5);
            }
        };

        // Display summary
        println!();
        println!("📊 Batch Summary:");
        println!("  Documents found: {}", summary.total_documents);
        println!("  Reports generated: {}", summary.processed);
        println!("  Skipped (no text): {}", summary.skipped);
        println!("  Empty extractions: {}", summary.empty_extractions);
        println!("  Failed: {}", summary.failed);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        let table = summary.render_table();
        if !table.is_empty() {
            println!("{table}");
        }

        if !summary.errors.is_empty() {
            println!("⚠️  Errors:");
            for error in &summary.errors {
                println!("  {} - {}", error.document, error.message);
            }
            println!();
        }

        // Exit code: partial failures are reported but don't look like a
        // fatal run
        if summary.failed > 0 || summary.skipped > 0 {
            Ok(1)
        } else {
            Ok(0)
        }
    }
}
