// Labsum - Clinical Lab-Report Summarizer
// Copyright (c) 2026 Labsum Contributors
// Licensed under the MIT License

use clap::Parser;
use labsum::cli::{Cli, Commands};
use labsum::logging::{bootstrap, init_logging};
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // The [logging] section of the configuration file controls the
    // optional file layer, so the configuration is peeked at here, before
    // command dispatch. Commands surface configuration errors themselves.
    let (log_level, logging_config) = bootstrap(&cli.config, cli.log_level.as_deref());
    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Labsum - Clinical Lab-Report Summarizer"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Process(args) => args.execute(&cli.config),
        Commands::Inspect(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
