//! Domain error types
//!
//! This module defines the error hierarchy for Labsum. All errors are
//! domain-specific and don't expose third-party types. Extraction and
//! rendering problems are recoverable per document; nothing in this
//! hierarchy is permitted to abort a batch as a whole.

use thiserror::Error;

/// Main Labsum error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum LabsumError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document text extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Report rendering errors
    #[error("Rendering error: {0}")]
    Rendering(#[from] RenderError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while obtaining or interpreting document text
///
/// These are per-document conditions: the batch driver records them,
/// skips the document and continues.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The text source could not produce text for the document
    #[error("Unreadable document {path}: {message}")]
    SourceUnreadable { path: String, message: String },

    /// No registered text source handles this document type
    #[error("Unsupported document type: {0}")]
    UnsupportedDocument(String),

    /// The pattern schema is malformed or fails to compile
    #[error("Invalid pattern schema: {0}")]
    SchemaInvalid(String),
}

/// Errors raised while rendering a summary report
#[derive(Debug, Error)]
pub enum RenderError {
    /// The primary report write failed; fatal for the document only
    #[error("Failed to write report {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// Optional branding asset could not be used; never fatal
    #[error("Branding asset unavailable: {0}")]
    BrandingUnavailable(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LabsumError {
    fn from(err: std::io::Error) -> Self {
        LabsumError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LabsumError {
    fn from(err: serde_json::Error) -> Self {
        LabsumError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LabsumError {
    fn from(err: toml::de::Error) -> Self {
        LabsumError::Configuration(format!("TOML parse error: {err}"))
    }
}
