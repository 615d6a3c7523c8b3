//! Inspect command implementation
//!
//! This module implements the `inspect` command: run a single document
//! through extraction and rule evaluation and print the result, without
//! writing a report. Useful when tuning the pattern library.

use crate::adapters::{PlainTextSource, TextSource};
use crate::config::load_config;
use crate::domain::ExtractionError;
use crate::extraction::{extract_record, PatternSchema};
use crate::rules::evaluate;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Document to inspect
    pub document: PathBuf,

    /// Print the record and assessment as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(document = %self.document.display(), "Inspecting document");

        // The pattern library override is the only configuration inspect
        // cares about; a missing config file falls back to the built-in
        // library.
        let schema = match load_config(config_path) {
            Ok(config) => match &config.processing.pattern_library {
                Some(path) => PatternSchema::from_file(path)
                    .map_err(|e| ExtractionError::SchemaInvalid(format!("{e:#}")))?,
                None => PatternSchema::default_patterns()
                    .map_err(|e| ExtractionError::SchemaInvalid(format!("{e:#}")))?,
            },
            Err(_) => PatternSchema::default_patterns()
                .map_err(|e| ExtractionError::SchemaInvalid(format!("{e:#}")))?,
        };

        let source = PlainTextSource::new();
        if !source.can_handle(&self.document) {
            let err = ExtractionError::UnsupportedDocument(self.document.display().to_string());
            eprintln!("❌ {err}");
            return Ok(1);
        }
        let text = match source.extract_text(&self.document) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(1);
            }
        };

        let outcome = extract_record(&text, &schema);
        let found = outcome.found_data();
        let record = outcome.into_record();
        let assessment = evaluate(&record);

        if self.json {
            let report = serde_json::json!({
                "extracted": found,
                "record": record,
                "assessment": assessment,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(0);
        }

        if !found {
            println!("⚠️  No recognizable fields in {}", self.document.display());
            return Ok(0);
        }

        println!("📄 {}", self.document.display());
        println!();
        println!("Extracted record:");
        println!("  Subject name: {}", opt_str(&record.subject_name));
        println!("  Age: {}", record.age.map_or("n/a".to_string(), |v| v.to_string()));
        println!("  Sex: {}", opt_str(&record.sex));
        println!("  Glucose: {}", opt_num(record.glucose));
        println!("  Total cholesterol: {}", opt_num(record.cholesterol_total));
        println!("  Creatinine: {}", opt_num(record.creatinine));
        println!("  Urine protein: {}", opt_str(&record.urine_protein));
        println!("  Urine glucose: {}", opt_str(&record.urine_glucose));
        println!();

        println!("Observations ({}):", assessment.observations.len());
        for observation in &assessment.observations {
            println!("  - {observation}");
        }
        println!("Recommendations ({}):", assessment.recommendations.len());
        for recommendation in &assessment.recommendations {
            println!("  - {recommendation}");
        }

        Ok(0)
    }
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "n/a".to_string())
}

fn opt_num(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v} mg/dL"))
}
