use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{Domain, SourceType};

/// Multiplier per source type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceTypeWeights {
    pub clinical_guideline: f64,
    pub academic_research: f64,
    pub medical_reference: f64,
    pub regulatory_guidance: f64,
    pub financial_education: f64,
    pub general: f64,
}

impl Default for SourceTypeWeights {
    fn default() -> Self {
        Self {
            clinical_guideline: defaults::WEIGHT_CLINICAL_GUIDELINE,
            academic_research: defaults::WEIGHT_ACADEMIC_RESEARCH,
            medical_reference: defaults::WEIGHT_MEDICAL_REFERENCE,
            regulatory_guidance: defaults::WEIGHT_REGULATORY_GUIDANCE,
            financial_education: defaults::WEIGHT_FINANCIAL_EDUCATION,
            general: defaults::WEIGHT_GENERAL,
        }
    }
}

impl SourceTypeWeights {
    pub fn weight(&self, source_type: SourceType) -> f64 {
        match source_type {
            SourceType::ClinicalGuideline => self.clinical_guideline,
            SourceType::AcademicResearch => self.academic_research,
            SourceType::MedicalReference => self.medical_reference,
            SourceType::RegulatoryGuidance => self.regulatory_guidance,
            SourceType::FinancialEducation => self.financial_education,
            SourceType::General => self.general,
        }
    }

    pub(crate) fn all(&self) -> [(&'static str, f64); 6] {
        [
            ("clinical_guideline", self.clinical_guideline),
            ("academic_research", self.academic_research),
            ("medical_reference", self.medical_reference),
            ("regulatory_guidance", self.regulatory_guidance),
            ("financial_education", self.financial_education),
            ("general", self.general),
        ]
    }
}

/// Source quality scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub source_type_weights: SourceTypeWeights,
    /// Domains whose sources lose weight with age.
    pub time_sensitive_domains: Vec<Domain>,
    pub recency_decay_per_year: f64,
    pub recency_floor: f64,
    /// Recency factor for undated sources in time-sensitive domains.
    pub undated_recency: f64,
    pub density_min: f64,
    pub density_max: f64,
    /// Distinct domain terms at which the density multiplier saturates.
    pub density_saturation: usize,
    /// Quality never exceeds `cap_factor * base_reliability`.
    pub cap_factor: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            source_type_weights: SourceTypeWeights::default(),
            time_sensitive_domains: vec![Domain::Finance],
            recency_decay_per_year: defaults::DEFAULT_RECENCY_DECAY_PER_YEAR,
            recency_floor: defaults::DEFAULT_RECENCY_FLOOR,
            undated_recency: defaults::DEFAULT_UNDATED_RECENCY,
            density_min: defaults::DEFAULT_DENSITY_MIN,
            density_max: defaults::DEFAULT_DENSITY_MAX,
            density_saturation: defaults::DEFAULT_DENSITY_SATURATION,
            cap_factor: defaults::DEFAULT_QUALITY_CAP_FACTOR,
        }
    }
}

impl QualityConfig {
    pub fn is_time_sensitive(&self, domain: Domain) -> bool {
        self.time_sensitive_domains.contains(&domain)
    }
}
