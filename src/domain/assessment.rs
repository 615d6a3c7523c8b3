//! Clinical assessment types

use serde::{Deserialize, Serialize};

/// Observations and recommendations derived from a clinical record
///
/// Produced fresh by the rule engine for each record and discarded with it;
/// there is no independent lifecycle. Both lists preserve the rule engine's
/// fixed evaluation order and may be empty — the report renderer, not the
/// rule engine, substitutes default "nothing notable" text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClinicalAssessment {
    /// Derived clinical findings, in rule priority order
    pub observations: Vec<String>,

    /// Derived advisory strings, in rule priority order
    pub recommendations: Vec<String>,
}

impl ClinicalAssessment {
    /// Returns true when no rule triggered
    pub fn is_unremarkable(&self) -> bool {
        self.observations.is_empty() && self.recommendations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assessment_is_unremarkable() {
        assert!(ClinicalAssessment::default().is_unremarkable());
    }

    #[test]
    fn test_assessment_with_observation_is_remarkable() {
        let assessment = ClinicalAssessment {
            observations: vec!["Elevated total cholesterol (cardiovascular risk).".to_string()],
            recommendations: Vec::new(),
        };
        assert!(!assessment.is_unremarkable());
    }
}
