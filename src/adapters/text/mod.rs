//! Document text sources
//!
//! A [`TextSource`] turns an input document into raw text, or fails for
//! that document alone. Failures here are always per-document: the batch
//! driver records them, skips the document and continues.

use crate::domain::{ExtractionError, Result};
use std::fs;
use std::path::Path;

/// Boundary trait for document text extraction
pub trait TextSource {
    /// Whether this source knows how to read the given document
    fn can_handle(&self, path: &Path) -> bool;

    /// Extract the raw text of a document
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::SourceUnreadable`] when the document
    /// cannot be read or produces no usable text.
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Text source for plain `.txt` documents
///
/// Reference implementation of the boundary; binary-format readers plug in
/// beside it at the [`TextSource`] seam.
#[derive(Debug, Default)]
pub struct PlainTextSource;

impl PlainTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PlainTextSource {
    fn can_handle(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
    }

    fn extract_text(&self, path: &Path) -> Result<String> {
        let text = fs::read_to_string(path).map_err(|e| ExtractionError::SourceUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        // A document that reads fine but contains no text is just as
        // unusable as one that cannot be opened.
        if text.trim().is_empty() {
            return Err(ExtractionError::SourceUnreadable {
                path: path.display().to_string(),
                message: "document produced no text".to_string(),
            }
            .into());
        }

        Ok(text)
    }
}
