//! Business logic orchestration
//!
//! The [`batch::BatchDriver`] wires the text source, pattern schema, rule
//! engine and renderer into the end-to-end pipeline; [`summary`] tracks
//! and reports the results.

pub mod batch;
pub mod summary;

pub use batch::BatchDriver;
pub use summary::{BatchError, BatchSummary, SummaryEntry};
