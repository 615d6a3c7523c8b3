//! Summary report rendering
//!
//! A [`ReportRenderer`] consumes an extracted record plus its assessment
//! and writes the anonymized summary document. The renderer, not the rule
//! engine, substitutes default text for empty observation and
//! recommendation lists.

use crate::domain::{ClinicalAssessment, ClinicalRecord, RenderError, Result};
use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OBSERVATION: &str = "No notable findings.";
const DEFAULT_RECOMMENDATION: &str = "Maintain healthy habits.";

/// Boundary trait for report rendering
pub trait ReportRenderer {
    /// File extension (without the dot) for reports produced by this renderer
    fn file_extension(&self) -> &'static str;

    /// Render one summary report to the given output path
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::WriteFailed`] only when the primary document
    /// write fails. Missing optional assets (the branding banner) are
    /// logged and never fail the document.
    fn render(
        &self,
        record: &ClinicalRecord,
        assessment: &ClinicalAssessment,
        output: &Path,
    ) -> Result<()>;
}

/// Plain-text report renderer with a fixed visual layout
///
/// Mirrors the layout of the rendered clinical summary: optional branding
/// banner, title, generation date, patient data, clinical results, then
/// observations and recommendations.
#[derive(Debug, Default)]
pub struct TextReportRenderer {
    branding: Option<PathBuf>,
}

impl TextReportRenderer {
    pub fn new() -> Self {
        Self { branding: None }
    }

    /// Use a text banner file as the report header
    pub fn with_branding(mut self, path: impl Into<PathBuf>) -> Self {
        self.branding = Some(path.into());
        self
    }

    /// Read the branding banner, if configured and present
    ///
    /// A configured but unreadable banner is a recoverable condition for
    /// the branding step only.
    fn branding_banner(&self) -> Option<String> {
        let path = self.branding.as_ref()?;
        match fs::read_to_string(path) {
            Ok(banner) => Some(banner.trim_end().to_string()),
            Err(e) => {
                let err = RenderError::BrandingUnavailable(format!("{}: {e}", path.display()));
                tracing::warn!(error = %err, "Skipping branding banner");
                None
            }
        }
    }

    fn format_report(&self, record: &ClinicalRecord, assessment: &ClinicalAssessment) -> String {
        let mut out = String::new();

        if let Some(banner) = self.branding_banner() {
            let _ = writeln!(out, "{banner}");
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "==============================================");
        let _ = writeln!(out, "          ANONYMIZED CLINICAL REPORT");
        let _ = writeln!(out, "==============================================");
        let _ = writeln!(out);
        let _ = writeln!(out, "Date: {}", Local::now().format("%d-%m-%Y"));
        let _ = writeln!(out);

        let _ = writeln!(out, "Patient data:");
        let _ = writeln!(
            out,
            "  Age: {}   |   Sex: {}",
            fmt_opt_int(record.age),
            fmt_opt_str(&record.sex)
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "Clinical results:");
        let _ = writeln!(out, "  Glucose: {} mg/dL", fmt_opt_num(record.glucose));
        let _ = writeln!(
            out,
            "  Total cholesterol: {} mg/dL",
            fmt_opt_num(record.cholesterol_total)
        );
        let _ = writeln!(out, "  Creatinine: {} mg/dL", fmt_opt_num(record.creatinine));
        let _ = writeln!(out, "  Urine protein: {}", fmt_opt_str(&record.urine_protein));
        let _ = writeln!(out, "  Urine glucose: {}", fmt_opt_str(&record.urine_glucose));
        let _ = writeln!(out);

        let _ = writeln!(out, "Observations:");
        if assessment.observations.is_empty() {
            let _ = writeln!(out, "  - {DEFAULT_OBSERVATION}");
        }
        for observation in &assessment.observations {
            let _ = writeln!(out, "  - {observation}");
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Recommendations:");
        if assessment.recommendations.is_empty() {
            let _ = writeln!(out, "  - {DEFAULT_RECOMMENDATION}");
        }
        for recommendation in &assessment.recommendations {
            let _ = writeln!(out, "  - {recommendation}");
        }

        out
    }
}

impl ReportRenderer for TextReportRenderer {
    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(
        &self,
        record: &ClinicalRecord,
        assessment: &ClinicalAssessment,
        output: &Path,
    ) -> Result<()> {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| RenderError::WriteFailed {
                path: output.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let report = self.format_report(record, assessment);

        fs::write(output, report).map_err(|e| RenderError::WriteFailed {
            path: output.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %output.display(), "Report written");
        Ok(())
    }
}

fn fmt_opt_num(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v}"))
}

fn fmt_opt_int(value: Option<u32>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn fmt_opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "n/a".to_string())
}
