//! Threshold rule engine
//!
//! Maps a [`ClinicalRecord`] to a [`ClinicalAssessment`]. Evaluation is
//! pure and total: no I/O, no randomness, no clock dependence, and two
//! calls on equal records yield identical output.
//!
//! Rules are evaluated in a fixed priority order because the output lists
//! render top-to-bottom: glucose, then cholesterol, then creatinine, then
//! urine protein, then urine glucose. Rows are independent; a record may
//! trigger any subset. Absent fields trigger nothing.

use crate::domain::{ClinicalAssessment, ClinicalRecord};

/// Fasting glucose at or above this value meets the diabetes criterion
pub const GLUCOSE_DIABETES_MG_DL: f64 = 126.0;

/// Fasting glucose at or above this value (and below the diabetes
/// criterion) counts as altered
pub const GLUCOSE_IMPAIRED_MG_DL: f64 = 100.0;

/// Total cholesterol strictly above this value is elevated
pub const CHOLESTEROL_ELEVATED_MG_DL: f64 = 200.0;

/// Creatinine strictly above this value is elevated
pub const CREATININE_ELEVATED_MG_DL: f64 = 1.3;

const OBS_GLUCOSE_DIABETES: &str =
    "Severely elevated fasting glucose (diabetes criterion).";
const OBS_GLUCOSE_IMPAIRED: &str = "Altered fasting glucose (possible prediabetes).";
const OBS_CHOLESTEROL: &str = "Elevated total cholesterol (cardiovascular risk).";
const OBS_CREATININE: &str = "Elevated creatinine (possible renal dysfunction).";
const OBS_URINE_PROTEIN: &str = "Protein in urine (possible renal damage).";
const OBS_URINE_GLUCOSE: &str = "Glucose in urine (possible uncontrolled diabetes).";

const REC_GLUCOSE: &str = "Reduce sugar and simple-carbohydrate intake.";
const REC_CHOLESTEROL: &str = "Reduce saturated fat, increase fiber and physical activity.";
const REC_CREATININE: &str = "Refer to nephrologist for renal evaluation.";

/// Evaluate a clinical record against the fixed threshold table
///
/// Exactly one glucose branch can fire; its recommendation fires for either
/// branch. Cholesterol and creatinine thresholds are strict ("greater
/// than"). Urinalysis tokens trigger on a case-insensitive positive marker.
/// The engine never injects default text for empty lists — that is the
/// report renderer's job.
pub fn evaluate(record: &ClinicalRecord) -> ClinicalAssessment {
    let mut assessment = ClinicalAssessment::default();

    if let Some(glucose) = record.glucose {
        if glucose >= GLUCOSE_DIABETES_MG_DL {
            assessment.observations.push(OBS_GLUCOSE_DIABETES.to_string());
            assessment.recommendations.push(REC_GLUCOSE.to_string());
        } else if glucose >= GLUCOSE_IMPAIRED_MG_DL {
            assessment.observations.push(OBS_GLUCOSE_IMPAIRED.to_string());
            assessment.recommendations.push(REC_GLUCOSE.to_string());
        }
    }

    if let Some(cholesterol) = record.cholesterol_total {
        if cholesterol > CHOLESTEROL_ELEVATED_MG_DL {
            assessment.observations.push(OBS_CHOLESTEROL.to_string());
            assessment.recommendations.push(REC_CHOLESTEROL.to_string());
        }
    }

    if let Some(creatinine) = record.creatinine {
        if creatinine > CREATININE_ELEVATED_MG_DL {
            assessment.observations.push(OBS_CREATININE.to_string());
            assessment.recommendations.push(REC_CREATININE.to_string());
        }
    }

    if let Some(token) = &record.urine_protein {
        if is_positive(token) {
            assessment.observations.push(OBS_URINE_PROTEIN.to_string());
        }
    }

    if let Some(token) = &record.urine_glucose {
        if is_positive(token) {
            assessment.observations.push(OBS_URINE_GLUCOSE.to_string());
        }
    }

    assessment
}

/// Case-insensitive positive marker for urinalysis tokens
///
/// The "positiv" stem covers both "positive" and the source-language
/// "positivo".
fn is_positive(token: &str) -> bool {
    token.to_lowercase().contains("positiv")
}
