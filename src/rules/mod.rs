//! Clinical threshold rules
//!
//! Pure, deterministic mapping from an extracted record to observation and
//! recommendation strings.

pub mod engine;

pub use engine::{
    evaluate, CHOLESTEROL_ELEVATED_MG_DL, CREATININE_ELEVATED_MG_DL, GLUCOSE_DIABETES_MG_DL,
    GLUCOSE_IMPAIRED_MG_DL,
};
