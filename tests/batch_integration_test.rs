//! End-to-end batch integration tests
//!
//! These tests run the full pipeline over temporary input directories:
//! text source, extraction, rule evaluation, rendering and the batch
//! summary.

use labsum::config::LabsumConfig;
use labsum::core::BatchDriver;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> LabsumConfig {
    let mut config = LabsumConfig::default();
    config.input.directory = dir.path().join("inbox");
    config.output.directory = dir.path().join("reports");
    fs::create_dir_all(&config.input.directory).unwrap();
    config
}

fn write_doc(config: &LabsumConfig, name: &str, contents: &str) {
    fs::write(config.input.directory.join(name), contents).unwrap();
}

fn report_files(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    files
}

#[test]
fn test_single_document_produces_named_report() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    write_doc(
        &config,
        "lab001.txt",
        "Paciente: JUAN PEREZ\nEdad: 45\nGlicemia Basal: 130,5\nColesterol Total: 190\n",
    );

    let summary = BatchDriver::new(&config).unwrap().run().unwrap();

    assert_eq!(summary.total_documents, 1);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.entries.len(), 1);
    assert_eq!(summary.entries[0].display_name, "JUAN PEREZ");
    assert!(summary.duration.as_nanos() > 0);

    let files = report_files(&config.output.directory);
    assert_eq!(files.len(), 1);
    // {timestamp}_{normalized_name}_report.{ext}
    assert!(files[0].contains("_juan_perez_report.txt"), "got {}", files[0]);

    let report =
        fs::read_to_string(config.output.directory.join(&files[0])).unwrap();
    assert!(report.contains("Severely elevated fasting glucose"));
    assert!(report.contains("Reduce sugar"));
    // Anonymized: the extracted name must not appear in the report body
    assert!(!report.contains("JUAN PEREZ"));
}

#[test]
fn test_unreadable_document_does_not_abort_batch() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    // Empty document: the text source treats it as unreadable
    write_doc(&config, "a_empty.txt", "");
    write_doc(
        &config,
        "b_good.txt",
        "Paciente: ANA SOTO\nEdad: 30\nColesterol Total: 210\n",
    );

    let summary = BatchDriver::new(&config).unwrap().run().unwrap();

    assert_eq!(summary.total_documents, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.errors.len(), 1);
    assert!(summary.errors[0].document.contains("a_empty.txt"));

    let files = report_files(&config.output.directory);
    assert_eq!(files.len(), 1);
    assert!(files[0].contains("_ana_soto_report.txt"));
}

#[test]
fn test_nameless_document_gets_positional_placeholder() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    write_doc(&config, "anon.txt", "Edad: 52\nGlicemia Basal: 95\n");

    let summary = BatchDriver::new(&config).unwrap().run().unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.entries[0].display_name, "Patient 1");

    let files = report_files(&config.output.directory);
    assert!(files[0].contains("_patient_1_report.txt"));
}

#[test]
fn test_empty_extraction_proceeds_with_placeholders_by_default() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    write_doc(&config, "memo.txt", "internal memo, nothing clinical here");

    let summary = BatchDriver::new(&config).unwrap().run().unwrap();

    assert_eq!(summary.empty_extractions, 1);
    assert_eq!(summary.processed, 1);

    let files = report_files(&config.output.directory);
    assert_eq!(files.len(), 1);
    let report =
        fs::read_to_string(config.output.directory.join(&files[0])).unwrap();
    assert!(report.contains("No notable findings."));
    assert!(report.contains("Maintain healthy habits."));
}

#[test]
fn test_skip_empty_mode_writes_no_placeholder_report() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.processing.skip_empty = true;
    write_doc(&config, "memo.txt", "internal memo, nothing clinical here");

    let summary = BatchDriver::new(&config).unwrap().run().unwrap();

    assert_eq!(summary.empty_extractions, 1);
    assert_eq!(summary.processed, 0);
    // An empty extraction skipped in this mode counts as a skip
    assert_eq!(summary.skipped, 1);
    assert!(report_files(&config.output.directory).is_empty());
}

#[test]
fn test_batch_processes_documents_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    let config = test_config(&dir);
    write_doc(&config, "b.txt", "Edad: 40\n");
    write_doc(&config, "a.txt", "Edad: 30\n");

    let summary = BatchDriver::new(&config).unwrap().run().unwrap();

    // Positions follow sorted file order, so a.txt is Patient 1
    assert_eq!(summary.entries.len(), 2);
    assert_eq!(summary.entries[0].display_name, "Patient 1");
    assert_eq!(summary.entries[1].display_name, "Patient 2");

    let table = summary.render_table();
    assert!(table.contains("Patient 1"));
    assert!(table.contains("patient_2_report"));
}

#[test]
fn test_external_pattern_library_override() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);

    let library = dir.path().join("custom_patterns.toml");
    fs::write(
        &library,
        r#"
        [[sources]]
        name = "custom"
        [sources.fields]
        subject_name = ['Titular\s*:\s*([A-Z\s]+?)(?:\s+\w+\s*:|$)']
        age = []
        sex = []
        creatinine = []
        glucose = ['Azucar\s*:\s*([\d.,]+)']
        cholesterol_total = []
        urine_protein = []
        urine_glucose = []
        "#,
    )
    .unwrap();
    config.processing.pattern_library = Some(library);

    write_doc(&config, "custom.txt", "Titular: EVA CRUZ\nAzucar: 140\n");

    let summary = BatchDriver::new(&config).unwrap().run().unwrap();
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.entries[0].display_name, "EVA CRUZ");

    let files = report_files(&config.output.directory);
    let report =
        fs::read_to_string(config.output.directory.join(&files[0])).unwrap();
    assert!(report.contains("Severely elevated fasting glucose"));
}
