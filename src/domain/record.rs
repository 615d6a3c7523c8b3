//! Clinical record types
//!
//! A [`ClinicalRecord`] is the typed, partially-populated result of
//! extracting the fixed set of clinical fields from one document's text.
//! Every field is optional: absence is a valid, meaningful state that says
//! "not found in the text", and is never treated as zero or as a match by
//! the rule engine.

use serde::{Deserialize, Serialize};

/// Structured result of extracting clinical fields from one document
///
/// Created once per input document, immutable thereafter, consumed by the
/// rule engine and the report renderer, then discarded. Numeric fields, when
/// present, are valid finite numbers; a capture that fails numeric coercion
/// leaves the field absent instead.
///
/// # Examples
///
/// ```
/// use labsum::domain::ClinicalRecord;
///
/// let record = ClinicalRecord {
///     subject_name: Some("JUAN PEREZ".to_string()),
///     glucose: Some(130.5),
///     ..ClinicalRecord::default()
/// };
/// assert!(!record.is_empty());
/// assert_eq!(record.present_field_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClinicalRecord {
    /// Raw matched subject name, not yet normalized for filesystem use
    pub subject_name: Option<String>,

    /// Age in years
    pub age: Option<u32>,

    /// Free-form sex token (e.g. "M", "F", "Masculino")
    pub sex: Option<String>,

    /// Serum creatinine in mg/dL
    pub creatinine: Option<f64>,

    /// Fasting glucose in mg/dL
    pub glucose: Option<f64>,

    /// Total cholesterol in mg/dL
    pub cholesterol_total: Option<f64>,

    /// Free-form urine protein token, carries positive/negative semantics
    pub urine_protein: Option<String>,

    /// Free-form urine glucose token, carries positive/negative semantics
    pub urine_glucose: Option<String>,
}

impl ClinicalRecord {
    /// Returns true when every field is absent
    pub fn is_empty(&self) -> bool {
        self.present_field_count() == 0
    }

    /// Number of fields that were found in the text
    pub fn present_field_count(&self) -> usize {
        let mut count = 0;
        count += usize::from(self.subject_name.is_some());
        count += usize::from(self.age.is_some());
        count += usize::from(self.sex.is_some());
        count += usize::from(self.creatinine.is_some());
        count += usize::from(self.glucose.is_some());
        count += usize::from(self.cholesterol_total.is_some());
        count += usize::from(self.urine_protein.is_some());
        count += usize::from(self.urine_glucose.is_some());
        count
    }

    /// Subject name normalized for use in output filenames
    ///
    /// Lowercased with whitespace runs replaced by single underscores.
    /// Returns `None` when no subject name was extracted; the caller is
    /// expected to fall back to a positional `patient_{i}` placeholder.
    pub fn normalized_subject_name(&self) -> Option<String> {
        self.subject_name.as_ref().map(|name| {
            name.split_whitespace()
                .map(|word| word.to_lowercase())
                .collect::<Vec<_>>()
                .join("_")
        })
    }
}

/// Outcome of running the record extractor over one document
///
/// Makes "extraction found something" explicit instead of requiring callers
/// to null-check every field of the record. `NothingFound` is a recoverable
/// condition: the caller decides whether to skip the document or proceed
/// with an all-absent record and placeholder output.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// At least one field was found; the record is non-empty
    Extracted(ClinicalRecord),

    /// No pattern source yielded any field
    NothingFound,
}

impl ExtractionOutcome {
    /// Returns true when extraction found at least one field
    pub fn found_data(&self) -> bool {
        matches!(self, ExtractionOutcome::Extracted(_))
    }

    /// Borrow the extracted record, if any
    pub fn record(&self) -> Option<&ClinicalRecord> {
        match self {
            ExtractionOutcome::Extracted(record) => Some(record),
            ExtractionOutcome::NothingFound => None,
        }
    }

    /// Consume the outcome, substituting the all-absent record when nothing
    /// was found
    pub fn into_record(self) -> ClinicalRecord {
        match self {
            ExtractionOutcome::Extracted(record) => record,
            ExtractionOutcome::NothingFound => ClinicalRecord::default(),
        }
    }
}
