//! Document text normalization
//!
//! Text extracted from layout-heavy documents arrives with arbitrary line
//! breaks and column padding. Normalization happens exactly once per
//! document, before any field extraction; the field extractor assumes
//! already-normalized input.

/// Collapse all whitespace runs (including newlines) to single spaces and
/// trim leading/trailing whitespace.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
