//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Labsum using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Labsum - clinical lab-report summarizer
#[derive(Parser, Debug)]
#[command(name = "labsum")]
#[command(version, about, long_about = None)]
#[command(author = "Labsum Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "labsum.toml", env = "LABSUM_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LABSUM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process every document in the input directory into summary reports
    Process(commands::process::ProcessArgs),

    /// Extract and evaluate a single document without writing a report
    Inspect(commands::inspect::InspectArgs),

    /// Validate configuration file and pattern library
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
