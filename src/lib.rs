// Labsum - Clinical Lab-Report Summarizer
// Copyright (c) 2026 Labsum Contributors
// Licensed under the MIT License

//! # Labsum - Clinical Lab-Report Summarizer
//!
//! Labsum is a batch tool that converts unstructured clinical lab-report
//! documents into anonymized, structured summary reports. It recovers a
//! fixed set of clinical fields from noisy free text via ordered fallback
//! pattern matching, evaluates the fields against fixed clinical
//! thresholds, and renders per-document summaries plus a batch table.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** typed clinical fields from raw document text with a
//!   data-driven, fallback-tolerant pattern schema
//! - **Evaluating** extracted records against a deterministic clinical
//!   rule engine producing ordered observations and recommendations
//! - **Rendering** anonymized summary reports through a pluggable
//!   renderer boundary
//! - **Batching** over an input directory, with per-document failure
//!   isolation and a final summary table
//!
//! ## Architecture
//!
//! Labsum follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (batch driver, summary)
//! - [`extraction`] - Text normalization, pattern schema, field and record
//!   extraction
//! - [`rules`] - Pure threshold rule engine
//! - [`adapters`] - Boundary traits for text sources and report renderers
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use labsum::config::load_config;
//! use labsum::core::BatchDriver;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("labsum.toml")?;
//!     let driver = BatchDriver::new(&config)?;
//!     let summary = driver.run()?;
//!
//!     println!("Generated {} reports", summary.processed);
//!     Ok(())
//! }
//! ```
//!
//! ## Extraction Model
//!
//! The pattern schema is an ordered list of fallback tiers ("sources"),
//! each mapping every clinical field to an ordered list of candidate
//! regular expressions. The first source that yields at least one field
//! wins; within a field, the first capture that coerces successfully wins.
//! A capture that fails numeric coercion behaves exactly like a pattern
//! that did not match — the field stays absent and extraction never
//! raises.
//!
//! ```rust
//! use labsum::extraction::{extract_record, PatternSchema};
//! use labsum::rules::evaluate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = PatternSchema::default_patterns()?;
//! let text = "Paciente: JUAN PEREZ\nEdad: 45\nGlicemia Basal: 130,5";
//!
//! let record = extract_record(text, &schema).into_record();
//! assert_eq!(record.glucose, Some(130.5));
//!
//! let assessment = evaluate(&record);
//! assert_eq!(assessment.observations.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Labsum uses the [`domain::LabsumError`] type for all errors. Every
//! per-document condition (unreadable document, failed coercion, no
//! pattern match, failed report write) is recovered locally; nothing in
//! the core terminates a batch as a whole.
//!
//! ## Logging
//!
//! Labsum uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting batch");
//! warn!(document = "inbox/scan.txt", "Skipping unreadable document");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod extraction;
pub mod logging;
pub mod rules;
