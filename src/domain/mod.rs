//! Core domain types and models
//!
//! This module contains the domain model for Labsum: the clinical record
//! extracted from a document, the assessment derived from it, and the
//! error hierarchy used throughout the crate.

pub mod assessment;
pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types
pub use assessment::ClinicalAssessment;
pub use errors::{ExtractionError, LabsumError, RenderError};
pub use record::{ClinicalRecord, ExtractionOutcome};
pub use result::Result;
