//! Record extraction across pattern sources
//!
//! Applies the field extractor over the full clinical schema. Pattern
//! sources are fallback tiers: the first source whose candidate record has
//! at least one present field wins and later sources are not tried.

use crate::domain::{ClinicalRecord, ExtractionOutcome};
use crate::extraction::field::extract_field;
use crate::extraction::normalize::normalize_text;
use crate::extraction::schema::{ClinicalField, CompiledSource, PatternSchema};

/// Extract a clinical record from raw document text
///
/// The raw text is normalized once before any field extraction. When every
/// source yields a fully-absent record the outcome is
/// [`ExtractionOutcome::NothingFound`]; the caller decides whether to skip
/// the document or proceed with placeholders. This function never fails:
/// unmatchable text is a recoverable, logged condition.
pub fn extract_record(raw_text: &str, schema: &PatternSchema) -> ExtractionOutcome {
    let text = normalize_text(raw_text);

    for source in schema.sources() {
        let candidate = extract_with_source(&text, source);
        if !candidate.is_empty() {
            tracing::debug!(
                source = source.name(),
                fields = candidate.present_field_count(),
                "Pattern source matched"
            );
            return ExtractionOutcome::Extracted(candidate);
        }
    }

    tracing::warn!("No pattern source yielded any field");
    ExtractionOutcome::NothingFound
}

/// Build a candidate record from a single pattern source
fn extract_with_source(text: &str, source: &CompiledSource) -> ClinicalRecord {
    let mut record = ClinicalRecord::default();

    for field in ClinicalField::ALL {
        let Some(value) = extract_field(text, source.patterns_for(field), field.kind()) else {
            continue;
        };

        match field {
            ClinicalField::SubjectName => {
                record.subject_name = value.as_text().map(str::to_string)
            }
            ClinicalField::Age => record.age = value.as_integer(),
            ClinicalField::Sex => record.sex = value.as_text().map(str::to_string),
            ClinicalField::Creatinine => record.creatinine = value.as_decimal(),
            ClinicalField::Glucose => record.glucose = value.as_decimal(),
            ClinicalField::CholesterolTotal => record.cholesterol_total = value.as_decimal(),
            ClinicalField::UrineProtein => {
                record.urine_protein = value.as_text().map(str::to_string)
            }
            ClinicalField::UrineGlucose => {
                record.urine_glucose = value.as_text().map(str::to_string)
            }
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> PatternSchema {
        PatternSchema::default_patterns().unwrap()
    }

    #[test]
    fn test_spanish_lab_report() {
        let text = "Paciente: JUAN PEREZ\nEdad: 45\nGlicemia Basal: 130,5\nColesterol Total: 190";
        let outcome = extract_record(text, &schema());

        let record = outcome.record().expect("extraction should find data");
        assert_eq!(record.subject_name.as_deref(), Some("JUAN PEREZ"));
        assert_eq!(record.age, Some(45));
        assert_eq!(record.glucose, Some(130.5));
        assert_eq!(record.cholesterol_total, Some(190.0));
        assert_eq!(record.creatinine, None);
        assert_eq!(record.sex, None);
        assert_eq!(record.urine_protein, None);
        assert_eq!(record.urine_glucose, None);
    }

    #[test]
    fn test_unrecognizable_text_yields_nothing_found() {
        let outcome = extract_record("lorem ipsum dolor sit amet", &schema());
        assert_eq!(outcome, ExtractionOutcome::NothingFound);
    }

    #[test]
    fn test_first_matching_source_wins() {
        // Both tiers could match their own labels; only the first tier's
        // record must be used once it yields a field.
        let text = "Paciente: ANA SOTO Edad: 30 Age: 99";
        let record = extract_record(text, &schema()).into_record();
        assert_eq!(record.subject_name.as_deref(), Some("ANA SOTO"));
        assert_eq!(record.age, Some(30));
    }

    #[test]
    fn test_fallback_to_second_source() {
        let text = "Patient: MARY JONES Age: 52 Total Cholesterol: 215";
        let record = extract_record(text, &schema()).into_record();
        assert_eq!(record.subject_name.as_deref(), Some("MARY JONES"));
        assert_eq!(record.age, Some(52));
        assert_eq!(record.cholesterol_total, Some(215.0));
    }

    #[test]
    fn test_all_empty_schema_yields_nothing_found() {
        let toml = r#"
            [[sources]]
            name = "sparse"
            [sources.fields]
            subject_name = []
            age = []
            sex = []
            creatinine = []
            glucose = []
            cholesterol_total = []
            urine_protein = []
            urine_glucose = []
        "#;
        let empty_schema = PatternSchema::from_toml(toml).unwrap();
        let outcome = extract_record("Paciente: JUAN PEREZ Edad: 45", &empty_schema);
        assert_eq!(outcome, ExtractionOutcome::NothingFound);
    }

    #[test]
    fn test_idempotent_extraction() {
        let text = "Paciente: JUAN PEREZ\nEdad: 45\nGlicemia Basal: 130,5";
        let first = extract_record(text, &schema());
        let second = extract_record(text, &schema());
        assert_eq!(first, second);
    }

    #[test]
    fn test_urinalysis_tokens() {
        let text = "Proteinas: Positivo Glucosa: Negativo";
        let record = extract_record(text, &schema()).into_record();
        assert_eq!(record.urine_protein.as_deref(), Some("Positivo"));
        assert_eq!(record.urine_glucose.as_deref(), Some("Negativo"));
    }
}
