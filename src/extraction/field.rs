//! Single-field extraction with fallback patterns and type coercion
//!
//! Candidate patterns for a field are tried strictly in list order against
//! pre-normalized text. A capture that fails coercion is treated exactly
//! like a pattern that did not match: the loop moves on to the next pattern
//! in the list (it never restarts earlier patterns and never raises), and
//! the field stays absent if no candidate produces a usable value.

use crate::extraction::schema::FieldKind;
use regex::Regex;

/// A successfully extracted, typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(u32),
    Decimal(f64),
}

impl FieldValue {
    /// The inner string for text fields
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The inner integer for integer fields
    pub fn as_integer(&self) -> Option<u32> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The inner decimal for decimal fields
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            FieldValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }
}

/// Extract one field from normalized text
///
/// Returns the first candidate pattern's capture that coerces successfully,
/// or `None` when no pattern yields a usable value. Never panics and never
/// returns an error: malformed captures are a recoverable, logged condition.
pub fn extract_field(text: &str, patterns: &[Regex], kind: FieldKind) -> Option<FieldValue> {
    for pattern in patterns {
        let Some(captures) = pattern.captures(text) else {
            continue;
        };

        let Some(raw) = captures.get(1).map(|m| m.as_str().trim()) else {
            tracing::debug!(pattern = %pattern.as_str(), "Pattern has no capture group");
            continue;
        };

        match coerce(raw, kind) {
            Some(value) => return Some(value),
            None => {
                tracing::debug!(
                    capture = raw,
                    pattern = %pattern.as_str(),
                    "Capture failed coercion, trying next pattern"
                );
                continue;
            }
        }
    }

    None
}

/// Coerce a trimmed capture into its typed form
///
/// Decimal captures get their decimal comma normalized to `.` before
/// parsing; non-finite parses are rejected. Empty captures never coerce.
fn coerce(raw: &str, kind: FieldKind) -> Option<FieldValue> {
    if raw.is_empty() {
        return None;
    }

    match kind {
        FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
        FieldKind::Integer => raw.parse::<u32>().ok().map(FieldValue::Integer),
        FieldKind::Decimal => raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(FieldValue::Decimal),
    }
}
