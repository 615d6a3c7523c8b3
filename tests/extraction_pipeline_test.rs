//! Integration tests for the extraction-and-rule-evaluation pipeline

use labsum::domain::{ClinicalRecord, ExtractionOutcome};
use labsum::extraction::{extract_record, PatternSchema};
use labsum::rules::evaluate;

fn schema() -> PatternSchema {
    PatternSchema::default_patterns().expect("built-in pattern library must compile")
}

#[test]
fn test_full_spanish_report_scenario() {
    let text = "\
        Paciente: JUAN PEREZ\n\
        Edad: 45\n\
        Glicemia Basal: 130,5\n\
        Colesterol Total: 190\n";

    let record = extract_record(text, &schema()).into_record();
    assert_eq!(
        record,
        ClinicalRecord {
            subject_name: Some("JUAN PEREZ".to_string()),
            age: Some(45),
            sex: None,
            creatinine: None,
            glucose: Some(130.5),
            cholesterol_total: Some(190.0),
            urine_protein: None,
            urine_glucose: None,
        }
    );

    let assessment = evaluate(&record);
    assert_eq!(
        assessment.observations,
        vec!["Severely elevated fasting glucose (diabetes criterion).".to_string()]
    );
    assert_eq!(
        assessment.recommendations,
        vec!["Reduce sugar and simple-carbohydrate intake.".to_string()]
    );
}

#[test]
fn test_unrecognizable_text_scenario() {
    let text = "Quarterly earnings were strong across all regions.";
    let outcome = extract_record(text, &schema());
    assert_eq!(outcome, ExtractionOutcome::NothingFound);

    let record = outcome.into_record();
    assert!(record.is_empty());

    let assessment = evaluate(&record);
    assert!(assessment.observations.is_empty());
    assert!(assessment.recommendations.is_empty());
}

#[test]
fn test_layout_noise_is_normalized_away() {
    // Column padding, stray newlines and mixed case must not defeat the
    // patterns: normalization runs once per document before extraction.
    let text = "  PACIENTE  :   ROSA   MARIN\n\n  edad :\n 67\n\tCreatinina : 1,8  \n";

    let record = extract_record(text, &schema()).into_record();
    assert_eq!(record.subject_name.as_deref(), Some("ROSA MARIN"));
    assert_eq!(record.age, Some(67));
    assert_eq!(record.creatinine, Some(1.8));
}

#[test]
fn test_pipeline_is_idempotent() {
    let text = "Paciente: LUIS VEGA\nEdad: 58\nGlicemia Basal: 112\nProteinas: Positivo\n";

    let first_record = extract_record(text, &schema()).into_record();
    let second_record = extract_record(text, &schema()).into_record();
    assert_eq!(first_record, second_record);

    let first_assessment = evaluate(&first_record);
    let second_assessment = evaluate(&second_record);
    assert_eq!(first_assessment, second_assessment);
}

#[test]
fn test_malformed_numeric_leaves_field_absent() {
    // A non-numeric creatinine value leaves that field absent; the rest of
    // the record is unaffected and nothing raises.
    let text = "Paciente: IVAN RIOS\nCreatinina: pendiente\nColesterol Total: 240\n";

    let record = extract_record(text, &schema()).into_record();
    assert_eq!(record.subject_name.as_deref(), Some("IVAN RIOS"));
    assert_eq!(record.creatinine, None);
    assert_eq!(record.cholesterol_total, Some(240.0));

    let assessment = evaluate(&record);
    assert_eq!(
        assessment.observations,
        vec!["Elevated total cholesterol (cardiovascular risk).".to_string()]
    );
}

#[test]
fn test_english_fallback_tier() {
    let text = "Patient: SARAH LEE\nAge: 49\nFasting Glucose: 101\nUrine Protein: positive\n";

    let record = extract_record(text, &schema()).into_record();
    assert_eq!(record.subject_name.as_deref(), Some("SARAH LEE"));
    assert_eq!(record.glucose, Some(101.0));
    assert_eq!(record.urine_protein.as_deref(), Some("positive"));

    let assessment = evaluate(&record);
    assert_eq!(
        assessment.observations,
        vec![
            "Altered fasting glucose (possible prediabetes).".to_string(),
            "Protein in urine (possible renal damage).".to_string(),
        ]
    );
    assert_eq!(
        assessment.recommendations,
        vec!["Reduce sugar and simple-carbohydrate intake.".to_string()]
    );
}

#[test]
fn test_urinalysis_only_report() {
    let text = "Proteinas: Positivo\nGlucosa: Positivo\n";

    let record = extract_record(text, &schema()).into_record();
    assert_eq!(record.urine_protein.as_deref(), Some("Positivo"));
    assert_eq!(record.urine_glucose.as_deref(), Some("Positivo"));

    let assessment = evaluate(&record);
    assert_eq!(
        assessment.observations,
        vec![
            "Protein in urine (possible renal damage).".to_string(),
            "Glucose in urine (possible uncontrolled diabetes).".to_string(),
        ]
    );
    // Urinalysis findings carry no recommendations
    assert!(assessment.recommendations.is_empty());
}
