//! Clinical field extraction
//!
//! Turns noisy free text into a typed [`ClinicalRecord`](crate::domain::ClinicalRecord)
//! via a data-driven, fallback-tolerant pattern schema:
//!
//! - [`normalize`] collapses document whitespace once per document
//! - [`schema`] loads and compiles the ordered pattern library
//! - [`field`] extracts one typed field with per-pattern fallback
//! - [`record`] applies the field extractor across the full schema
//!
//! Extraction is pure computation over in-memory strings: no I/O beyond
//! loading the pattern library, no panics on malformed input.

pub mod field;
pub mod normalize;
pub mod record;
pub mod schema;

// Re-export the main entry points
pub use field::{extract_field, FieldValue};
pub use normalize::normalize_text;
pub use record::extract_record;
pub use schema::{ClinicalField, FieldKind, PatternSchema};
