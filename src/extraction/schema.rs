//! Pattern schema for clinical field extraction
//!
//! The schema is an ordered set of "pattern sources". Each source is one
//! complete fallback tier mapping every clinical field to an ordered list of
//! candidate regular expressions. Sources are tried in order by the record
//! extractor; within a field, candidates are tried in list order.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// The fixed set of clinical fields recognized by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClinicalField {
    SubjectName,
    Age,
    Sex,
    Creatinine,
    Glucose,
    CholesterolTotal,
    UrineProtein,
    UrineGlucose,
}

/// How a captured value is coerced into its typed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Raw trimmed string
    Text,
    /// Non-negative integer (years)
    Integer,
    /// Finite decimal, `,` normalized to `.` before parsing
    Decimal,
}

impl ClinicalField {
    /// All fields, in schema order
    pub const ALL: [ClinicalField; 8] = [
        ClinicalField::SubjectName,
        ClinicalField::Age,
        ClinicalField::Sex,
        ClinicalField::Creatinine,
        ClinicalField::Glucose,
        ClinicalField::CholesterolTotal,
        ClinicalField::UrineProtein,
        ClinicalField::UrineGlucose,
    ];

    /// The coercion applied to this field's captures
    pub fn kind(self) -> FieldKind {
        match self {
            ClinicalField::Age => FieldKind::Integer,
            ClinicalField::Creatinine
            | ClinicalField::Glucose
            | ClinicalField::CholesterolTotal => FieldKind::Decimal,
            ClinicalField::SubjectName
            | ClinicalField::Sex
            | ClinicalField::UrineProtein
            | ClinicalField::UrineGlucose => FieldKind::Text,
        }
    }

    /// Schema key for this field
    pub fn name(self) -> &'static str {
        match self {
            ClinicalField::SubjectName => "subject_name",
            ClinicalField::Age => "age",
            ClinicalField::Sex => "sex",
            ClinicalField::Creatinine => "creatinine",
            ClinicalField::Glucose => "glucose",
            ClinicalField::CholesterolTotal => "cholesterol_total",
            ClinicalField::UrineProtein => "urine_protein",
            ClinicalField::UrineGlucose => "urine_glucose",
        }
    }
}

impl fmt::Display for ClinicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pattern lists for one source, as declared in TOML
///
/// Every field key is required: a source that doesn't cover a field must
/// declare an empty list rather than omit the key.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceFieldsDef {
    subject_name: Vec<String>,
    age: Vec<String>,
    sex: Vec<String>,
    creatinine: Vec<String>,
    glucose: Vec<String>,
    cholesterol_total: Vec<String>,
    urine_protein: Vec<String>,
    urine_glucose: Vec<String>,
}

/// One source definition from TOML
#[derive(Debug, Clone, Deserialize)]
struct SourceDef {
    name: String,
    fields: SourceFieldsDef,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct SchemaFile {
    sources: Vec<SourceDef>,
}

/// One compiled fallback tier
#[derive(Debug)]
pub struct CompiledSource {
    name: String,
    subject_name: Vec<Regex>,
    age: Vec<Regex>,
    sex: Vec<Regex>,
    creatinine: Vec<Regex>,
    glucose: Vec<Regex>,
    cholesterol_total: Vec<Regex>,
    urine_protein: Vec<Regex>,
    urine_glucose: Vec<Regex>,
}

impl CompiledSource {
    /// Source name, for logging
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered candidate patterns for a field
    pub fn patterns_for(&self, field: ClinicalField) -> &[Regex] {
        match field {
            ClinicalField::SubjectName => &self.subject_name,
            ClinicalField::Age => &self.age,
            ClinicalField::Sex => &self.sex,
            ClinicalField::Creatinine => &self.creatinine,
            ClinicalField::Glucose => &self.glucose,
            ClinicalField::CholesterolTotal => &self.cholesterol_total,
            ClinicalField::UrineProtein => &self.urine_protein,
            ClinicalField::UrineGlucose => &self.urine_glucose,
        }
    }
}

/// Compiled, ordered pattern schema
#[derive(Debug)]
pub struct PatternSchema {
    sources: Vec<CompiledSource>,
}

impl PatternSchema {
    /// Load and compile a pattern schema from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Compile a pattern schema from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: SchemaFile =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        if file.sources.is_empty() {
            anyhow::bail!("Pattern library defines no sources");
        }

        let mut sources = Vec::with_capacity(file.sources.len());
        for def in file.sources {
            sources.push(Self::compile_source(def)?);
        }

        Ok(Self { sources })
    }

    /// Built-in pattern library embedded at compile time
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../patterns/lab_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Compiled sources, in fallback order
    pub fn sources(&self) -> &[CompiledSource] {
        &self.sources
    }

    /// Total number of compiled patterns across all sources and fields
    pub fn pattern_count(&self) -> usize {
        self.sources
            .iter()
            .map(|source| {
                ClinicalField::ALL
                    .iter()
                    .map(|field| source.patterns_for(*field).len())
                    .sum::<usize>()
            })
            .sum()
    }

    fn compile_source(def: SourceDef) -> Result<CompiledSource> {
        let name = def.name;
        let fields = def.fields;

        Ok(CompiledSource {
            subject_name: Self::compile_list(&name, "subject_name", &fields.subject_name)?,
            age: Self::compile_list(&name, "age", &fields.age)?,
            sex: Self::compile_list(&name, "sex", &fields.sex)?,
            creatinine: Self::compile_list(&name, "creatinine", &fields.creatinine)?,
            glucose: Self::compile_list(&name, "glucose", &fields.glucose)?,
            cholesterol_total: Self::compile_list(
                &name,
                "cholesterol_total",
                &fields.cholesterol_total,
            )?,
            urine_protein: Self::compile_list(&name, "urine_protein", &fields.urine_protein)?,
            urine_glucose: Self::compile_list(&name, "urine_glucose", &fields.urine_glucose)?,
            name,
        })
    }

    fn compile_list(source: &str, field: &str, patterns: &[String]) -> Result<Vec<Regex>> {
        patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| {
                        format!("Invalid regex in source '{source}', field '{field}': {pattern}")
                    })
            })
            .collect()
    }
}
