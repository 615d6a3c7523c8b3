//! Batch summary and reporting
//!
//! This module defines structures for tracking and reporting the results
//! of one batch run.

use std::time::Duration;

/// One successfully processed document in the batch summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Extracted subject name, or a positional "Patient {i}" placeholder
    pub display_name: String,

    /// File name of the generated report
    pub output_file: String,
}

impl SummaryEntry {
    pub fn new(display_name: impl Into<String>, output_file: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            output_file: output_file.into(),
        }
    }
}

/// A per-document failure recorded during the batch
#[derive(Debug, Clone)]
pub struct BatchError {
    /// Input document the failure belongs to
    pub document: String,

    /// Error message
    pub message: String,
}

/// Summary of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Total number of input documents discovered
    pub total_documents: usize,

    /// Number of documents processed through to a report
    pub processed: usize,

    /// Number of documents skipped: no text could be extracted, or the
    /// extraction came up empty while skip-empty mode is on
    pub skipped: usize,

    /// Number of documents where extraction found no fields
    pub empty_extractions: usize,

    /// Number of documents whose report could not be written
    pub failed: usize,

    /// Duration of the batch
    pub duration: Duration,

    /// Summary table entries for processed documents
    pub entries: Vec<SummaryEntry>,

    /// Errors encountered during the batch
    pub errors: Vec<BatchError>,
}

impl BatchSummary {
    /// Create a new empty batch summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a processed document
    pub fn add_entry(&mut self, entry: SummaryEntry) {
        self.entries.push(entry);
    }

    /// Record a per-document failure
    pub fn add_error(&mut self, document: impl Into<String>, message: impl Into<String>) {
        self.errors.push(BatchError {
            document: document.into(),
            message: message.into(),
        });
    }

    /// Success rate as a percentage of discovered documents
    pub fn success_rate(&self) -> f64 {
        if self.total_documents == 0 {
            return 100.0;
        }
        (self.processed as f64 / self.total_documents as f64) * 100.0
    }

    /// Render the summary table of processed documents
    ///
    /// Two aligned columns: display name and report file name. Empty when
    /// no document produced a report.
    pub fn render_table(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let name_width = self
            .entries
            .iter()
            .map(|e| e.display_name.len())
            .max()
            .unwrap_or(0)
            .max("Patient".len());

        let mut table = String::new();
        table.push_str(&format!("{:<name_width$}  Report\n", "Patient"));
        table.push_str(&format!("{:-<name_width$}  ------\n", ""));
        for entry in &self.entries {
            table.push_str(&format!(
                "{:<name_width$}  {}\n",
                entry.display_name, entry.output_file
            ));
        }

        table
    }
}
