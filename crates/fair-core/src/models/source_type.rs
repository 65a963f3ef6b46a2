use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of publication an evidence source comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    ClinicalGuideline,
    AcademicResearch,
    MedicalReference,
    RegulatoryGuidance,
    FinancialEducation,
    General,
}

impl SourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClinicalGuideline => "clinical_guideline",
            Self::AcademicResearch => "academic_research",
            Self::MedicalReference => "medical_reference",
            Self::RegulatoryGuidance => "regulatory_guidance",
            Self::FinancialEducation => "financial_education",
            Self::General => "general",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
