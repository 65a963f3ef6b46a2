//! QualityScorer: reliability × recency × source type × keyword density,
//! capped relative to reliability.
//!
//! Each factor is a pure function of explicit parameters; the scorer only
//! looks up those parameters for a given source.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use fair_core::config::{ExpansionConfig, QualityConfig};
use fair_core::models::EvidenceSource;
use fair_core::text::tokenize;

const DAYS_PER_YEAR: f64 = 365.25;

/// Age-based decay for time-sensitive domains.
///
/// `1 - decay * years`, never below `floor`. Sources outside a
/// time-sensitive domain and sources dated in the future get 1.0;
/// undated sources get `undated`.
pub fn recency_factor(
    published: Option<NaiveDate>,
    today: NaiveDate,
    time_sensitive: bool,
    decay_per_year: f64,
    floor: f64,
    undated: f64,
) -> f64 {
    if !time_sensitive {
        return 1.0;
    }
    let Some(published) = published else {
        return undated;
    };
    let days = (today - published).num_days();
    if days <= 0 {
        return 1.0;
    }
    let years = days as f64 / DAYS_PER_YEAR;
    (1.0 - decay_per_year * years).max(floor)
}

/// Linear in the fraction of `saturation` domain terms found, within [min, max].
pub fn keyword_density_multiplier(matched: usize, saturation: usize, min: f64, max: f64) -> f64 {
    let fraction = if saturation == 0 {
        1.0
    } else {
        (matched as f64 / saturation as f64).min(1.0)
    };
    min + (max - min) * fraction
}

/// Product of the factors, capped at `cap_factor * reliability`.
pub fn combine(
    reliability: f64,
    recency: f64,
    type_weight: f64,
    density: f64,
    cap_factor: f64,
) -> f64 {
    let raw = reliability * recency * type_weight * density;
    raw.min(cap_factor * reliability).max(0.0)
}

#[derive(Debug, Clone)]
pub struct QualityScorer {
    config: QualityConfig,
    lexicons: ExpansionConfig,
}

impl QualityScorer {
    pub fn new(config: QualityConfig, lexicons: ExpansionConfig) -> Self {
        Self { config, lexicons }
    }

    pub fn score(&self, source: &EvidenceSource) -> f64 {
        self.score_at(source, Utc::now().date_naive())
    }

    /// Quality as of `today`.
    pub fn score_at(&self, source: &EvidenceSource, today: NaiveDate) -> f64 {
        let cfg = &self.config;
        let recency = recency_factor(
            source.publication_date,
            today,
            cfg.is_time_sensitive(source.domain),
            cfg.recency_decay_per_year,
            cfg.recency_floor,
            cfg.undated_recency,
        );
        let type_weight = cfg.source_type_weights.weight(source.source_type);
        let density = keyword_density_multiplier(
            self.domain_terms_in(source),
            cfg.density_saturation,
            cfg.density_min,
            cfg.density_max,
        );
        combine(
            source.base_reliability,
            recency,
            type_weight,
            density,
            cfg.cap_factor,
        )
    }

    /// Distinct technical terms of the source's domain found in its content.
    pub fn domain_terms_in(&self, source: &EvidenceSource) -> usize {
        let tokens: HashSet<String> = tokenize(&source.content).into_iter().collect();
        let vocabulary: HashSet<&str> = self
            .lexicons
            .lexicons(source.domain)
            .into_iter()
            .flat_map(|l| l.technical_terms.iter().map(String::as_str))
            .collect();
        vocabulary.iter().filter(|t| tokens.contains(**t)).count()
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new(QualityConfig::default(), ExpansionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_core::models::{Domain, Origin, SourceType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn source(domain: Domain, content: &str, published: Option<NaiveDate>) -> EvidenceSource {
        EvidenceSource {
            id: "s".to_string(),
            domain,
            title: "t".to_string(),
            content: content.to_string(),
            source_type: SourceType::ClinicalGuideline,
            base_reliability: 0.5,
            publication_date: published,
            keywords: vec![],
            url: None,
            origin: Origin::Curated,
        }
    }

    #[test]
    fn reliability_half_type_weight_one_point_two() {
        assert!((combine(0.5, 1.0, 1.2, 1.0, 1.2) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn cap_limits_compounding() {
        assert!((combine(0.9, 1.0, 1.2, 1.2, 1.2) - 1.08).abs() < 1e-12);
    }

    #[test]
    fn recency_decays_and_floors() {
        let today = date(2024, 1, 1);
        let one_year = recency_factor(Some(date(2023, 1, 1)), today, true, 0.2, 0.6, 1.0);
        assert!((one_year - 0.8).abs() < 0.002);
        let old = recency_factor(Some(date(2010, 1, 1)), today, true, 0.2, 0.6, 1.0);
        assert_eq!(old, 0.6);
        assert_eq!(recency_factor(Some(date(2010, 1, 1)), today, false, 0.2, 0.6, 1.0), 1.0);
        assert_eq!(recency_factor(None, today, true, 0.2, 0.6, 0.9), 0.9);
        assert_eq!(recency_factor(Some(date(2030, 1, 1)), today, true, 0.2, 0.6, 1.0), 1.0);
    }

    #[test]
    fn density_spans_bounds() {
        assert_eq!(keyword_density_multiplier(0, 5, 0.8, 1.2), 0.8);
        assert!((keyword_density_multiplier(5, 5, 0.8, 1.2) - 1.2).abs() < 1e-12);
        assert!((keyword_density_multiplier(9, 5, 0.8, 1.2) - 1.2).abs() < 1e-12);
        assert!((keyword_density_multiplier(2, 4, 0.8, 1.2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn medical_sources_do_not_age() {
        let scorer = QualityScorer::default();
        let s = source(Domain::Medical, "plain words", Some(date(1990, 1, 1)));
        // clinical 1.2 × density 0.8 × reliability 0.5
        assert!((scorer.score_at(&s, date(2024, 1, 1)) - 0.48).abs() < 1e-12);
    }

    #[test]
    fn finance_sources_age() {
        let scorer = QualityScorer::default();
        let s = source(Domain::Finance, "plain words", Some(date(1990, 1, 1)));
        assert!((scorer.score_at(&s, date(2024, 1, 1)) - 0.5 * 0.6 * 1.2 * 0.8).abs() < 1e-12);
    }

    #[test]
    fn counts_distinct_domain_terms() {
        let scorer = QualityScorer::default();
        let s = source(
            Domain::Finance,
            "Interest and more interest: compound growth in a savings portfolio",
            None,
        );
        assert_eq!(scorer.domain_terms_in(&s), 4);
    }
}
