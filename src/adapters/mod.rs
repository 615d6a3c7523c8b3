//! External boundary adapters
//!
//! The pipeline core never touches document formats or page layout
//! directly; it consumes a [`text::TextSource`] and produces to a
//! [`render::ReportRenderer`]. Both are trait seams with plain-text
//! reference implementations, so other formats plug in without touching
//! extraction or rule logic.

pub mod render;
pub mod text;

pub use render::{ReportRenderer, TextReportRenderer};
pub use text::{PlainTextSource, TextSource};
