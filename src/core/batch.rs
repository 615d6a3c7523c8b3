//! Batch driver - main orchestrator for the summarization pipeline
//!
//! Discovers input documents, runs each one through text extraction, record
//! extraction, rule evaluation and rendering, and tracks a batch summary.
//! Documents are processed independently and sequentially; a failure on one
//! document never aborts the batch.

use crate::adapters::{PlainTextSource, ReportRenderer, TextReportRenderer, TextSource};
use crate::config::LabsumConfig;
use crate::core::summary::{BatchSummary, SummaryEntry};
use crate::domain::{ExtractionError, LabsumError, Result};
use crate::extraction::{extract_record, PatternSchema};
use crate::rules::evaluate;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Batch driver
pub struct BatchDriver {
    input_dir: PathBuf,
    output_dir: PathBuf,
    dry_run: bool,
    skip_empty: bool,
    schema: PatternSchema,
    source: Box<dyn TextSource>,
    renderer: Box<dyn ReportRenderer>,
}

impl BatchDriver {
    /// Create a batch driver from configuration with the default adapters
    ///
    /// Loads the external pattern library when one is configured, the
    /// embedded one otherwise.
    pub fn new(config: &LabsumConfig) -> Result<Self> {
        let schema = match &config.processing.pattern_library {
            Some(path) => PatternSchema::from_file(path)
                .map_err(|e| ExtractionError::SchemaInvalid(format!("{e:#}")))?,
            None => PatternSchema::default_patterns()
                .map_err(|e| ExtractionError::SchemaInvalid(format!("{e:#}")))?,
        };

        let mut renderer = TextReportRenderer::new();
        if let Some(branding) = &config.output.branding {
            renderer = renderer.with_branding(branding);
        }

        Ok(Self::with_parts(
            config,
            schema,
            Box::new(PlainTextSource::new()),
            Box::new(renderer),
        ))
    }

    /// Create a batch driver with explicit schema and adapters
    pub fn with_parts(
        config: &LabsumConfig,
        schema: PatternSchema,
        source: Box<dyn TextSource>,
        renderer: Box<dyn ReportRenderer>,
    ) -> Self {
        Self {
            input_dir: config.input.directory.clone(),
            output_dir: config.output.directory.clone(),
            dry_run: config.processing.dry_run,
            skip_empty: config.processing.skip_empty,
            schema,
            source,
            renderer,
        }
    }

    /// Process every handleable document in the input directory
    ///
    /// Returns the batch summary. Per-document failures (unreadable
    /// documents, failed report writes) are recorded in the summary and the
    /// batch continues; only an unusable input directory is an error.
    pub fn run(&self) -> Result<BatchSummary> {
        let started = Instant::now();
        let documents = self.discover_documents()?;

        tracing::info!(
            count = documents.len(),
            input = %self.input_dir.display(),
            dry_run = self.dry_run,
            "Starting batch"
        );

        let mut summary = BatchSummary::new();
        summary.total_documents = documents.len();

        for (index, path) in documents.iter().enumerate() {
            // 1-based position, used for placeholder names
            self.process_document(path, index + 1, &mut summary);
        }

        summary.duration = started.elapsed();
        tracing::info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            duration_ms = summary.duration.as_millis(),
            "Batch completed"
        );

        Ok(summary)
    }

    /// Discover handleable documents in the input directory, sorted by name
    fn discover_documents(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.input_dir).map_err(|e| {
            LabsumError::Configuration(format!(
                "Cannot read input directory {}: {}",
                self.input_dir.display(),
                e
            ))
        })?;

        let mut documents: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && self.source.can_handle(path))
            .collect();

        documents.sort();
        Ok(documents)
    }

    /// Run one document end-to-end, recording the result in the summary
    fn process_document(&self, path: &Path, position: usize, summary: &mut BatchSummary) {
        let document = path.display().to_string();

        let text = match self.source.extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(document = %document, error = %e, "Skipping unreadable document");
                println!("[{position}] ⏭️  Skipped (no text): {document}");
                summary.add_error(&document, e.to_string());
                summary.skipped += 1;
                return;
            }
        };

        let outcome = extract_record(&text, &self.schema);
        if !outcome.found_data() {
            summary.empty_extractions += 1;
            tracing::info!(document = %document, "Extraction found no fields");
            if self.skip_empty {
                println!("[{position}] ⏭️  Skipped (no fields): {document}");
                summary.skipped += 1;
                return;
            }
        }

        let record = outcome.into_record();
        let assessment = evaluate(&record);

        let display_name = record
            .subject_name
            .clone()
            .unwrap_or_else(|| format!("Patient {position}"));
        let file_stem = record
            .normalized_subject_name()
            .unwrap_or_else(|| format!("patient_{position}"));
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let file_name = format!(
            "{timestamp}_{file_stem}_report.{}",
            self.renderer.file_extension()
        );
        let output = self.output_dir.join(&file_name);

        if self.dry_run {
            println!("[{position}] 🔍 Would generate: {}", output.display());
            summary.processed += 1;
            summary.add_entry(SummaryEntry::new(display_name, file_name));
            return;
        }

        match self.renderer.render(&record, &assessment, &output) {
            Ok(()) => {
                println!("[{position}] ✅ Generated: {}", output.display());
                summary.processed += 1;
                summary.add_entry(SummaryEntry::new(display_name, file_name));
            }
            Err(e) => {
                tracing::error!(document = %document, error = %e, "Failed to write report");
                println!("[{position}] ❌ Failed: {document}");
                summary.add_error(&document, e.to_string());
                summary.failed += 1;
            }
        }
    }
}
