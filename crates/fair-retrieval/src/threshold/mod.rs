//! ThresholdPolicy: per-query minimum combined score, with stepwise
//! relaxation when nothing would survive.

use fair_core::config::{ExpansionConfig, ThresholdConfig};
use fair_core::models::{Domain, Query, RetrievalCandidate};
use fair_core::text::tokenize;
use serde::Serialize;
use tracing::debug;

const SCORE_EPSILON: f64 = 1e-12;

/// −adjustment for short queries, +adjustment for long ones, 0 otherwise.
pub fn length_adjustment(tokens: usize, short_max: usize, long_min: usize, adjustment: f64) -> f64 {
    if tokens <= short_max {
        -adjustment
    } else if tokens >= long_min {
        adjustment
    } else {
        0.0
    }
}

/// Fraction of tokens that are technical vocabulary. Zero for an empty query.
pub fn technical_density(tokens: &[String], is_technical: impl Fn(&str) -> bool) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let technical = tokens.iter().filter(|t| is_technical(t)).count();
    technical as f64 / tokens.len() as f64
}

/// Base plus adjustments, clamped to `[min, max]`.
pub fn clamp_threshold(base: f64, length_adj: f64, technical_adj: f64, min: f64, max: f64) -> f64 {
    (base + length_adj + technical_adj).clamp(min, max)
}

/// Result of filtering a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdOutcome {
    /// Threshold computed for the query.
    pub policy_threshold: f64,
    /// Threshold actually used after relaxation.
    pub effective_threshold: f64,
    pub relaxation_steps: u32,
    pub pool_size: usize,
    pub admitted: usize,
}

impl ThresholdOutcome {
    pub fn relaxed(&self) -> bool {
        self.relaxation_steps > 0
    }
}

#[derive(Debug, Clone)]
pub struct ThresholdPolicy {
    config: ThresholdConfig,
    lexicons: ExpansionConfig,
}

impl ThresholdPolicy {
    pub fn new(config: ThresholdConfig, lexicons: ExpansionConfig) -> Self {
        Self { config, lexicons }
    }

    /// Threshold for `query`, computed on its raw text.
    pub fn threshold(&self, query: &Query) -> f64 {
        self.threshold_for(query.domain, &query.text)
    }

    pub fn threshold_for(&self, domain: Domain, text: &str) -> f64 {
        let cfg = &self.config;
        let tokens = tokenize(text);
        let length_adj = length_adjustment(
            tokens.len(),
            cfg.short_query_tokens,
            cfg.long_query_tokens,
            cfg.length_adjustment,
        );
        let density = technical_density(&tokens, |t| self.lexicons.is_technical(domain, t));
        let technical_adj = if density > cfg.technical_density_level {
            cfg.technical_adjustment
        } else {
            0.0
        };
        clamp_threshold(cfg.base.get(domain), length_adj, technical_adj, cfg.min, cfg.max)
    }

    /// Keep candidates at or above the threshold, relaxing it until at least
    /// one survives or the floor is reached. An empty result is valid.
    pub fn filter(
        &self,
        query: &Query,
        candidates: Vec<RetrievalCandidate>,
    ) -> (Vec<RetrievalCandidate>, ThresholdOutcome) {
        let policy_threshold = self.threshold(query);
        let (kept, outcome) = self.filter_from(policy_threshold, candidates);
        debug!(
            policy = outcome.policy_threshold,
            effective = outcome.effective_threshold,
            steps = outcome.relaxation_steps,
            admitted = outcome.admitted,
            pool = outcome.pool_size,
            "threshold applied"
        );
        (kept, outcome)
    }

    /// Same as [`filter`](Self::filter) with an explicit starting threshold.
    pub fn filter_from(
        &self,
        policy_threshold: f64,
        candidates: Vec<RetrievalCandidate>,
    ) -> (Vec<RetrievalCandidate>, ThresholdOutcome) {
        let pool_size = candidates.len();
        let floor = self.config.relaxation_floor.min(policy_threshold);
        let step = self.config.relaxation_step;
        let mut effective = policy_threshold;
        let mut steps = 0u32;

        let admits = |c: &RetrievalCandidate, t: f64| c.combined_score + SCORE_EPSILON >= t;

        while pool_size > 0
            && !candidates.iter().any(|c| admits(c, effective))
            && effective > floor
            && step > 0.0
        {
            effective = (effective - step).max(floor);
            steps += 1;
        }

        let kept: Vec<RetrievalCandidate> = candidates
            .into_iter()
            .filter(|c| admits(c, effective))
            .collect();
        let outcome = ThresholdOutcome {
            policy_threshold,
            effective_threshold: effective,
            relaxation_steps: steps,
            pool_size,
            admitted: kept.len(),
        };
        (kept, outcome)
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(ThresholdConfig::default(), ExpansionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use fair_core::models::{EvidenceSource, Origin, SourceType};

    fn candidate(id: &str, combined: f64) -> RetrievalCandidate {
        let source = EvidenceSource {
            id: id.to_string(),
            domain: Domain::Finance,
            title: id.to_string(),
            content: "c".to_string(),
            source_type: SourceType::General,
            base_reliability: 0.5,
            publication_date: None,
            keywords: vec![],
            url: None,
            origin: Origin::Curated,
        };
        let mut c = RetrievalCandidate::new(Arc::new(source), Arc::new(vec![]));
        c.combined_score = combined;
        c
    }

    #[test]
    fn short_finance_query() {
        let policy = ThresholdPolicy::default();
        // 4 tokens, "compound" and "interest" are technical: density 0.5.
        let t = policy.threshold_for(Domain::Finance, "What is compound interest?");
        assert!((t - 0.30).abs() < 1e-12);
    }

    #[test]
    fn medium_plain_medical_query() {
        let policy = ThresholdPolicy::default();
        let t = policy.threshold_for(Domain::Medical, "how long should a person rest after a long walk");
        assert!((t - 0.35).abs() < 1e-12);
    }

    #[test]
    fn length_buckets() {
        assert_eq!(length_adjustment(3, 5, 15, 0.05), -0.05);
        assert_eq!(length_adjustment(5, 5, 15, 0.05), -0.05);
        assert_eq!(length_adjustment(10, 5, 15, 0.05), 0.0);
        assert_eq!(length_adjustment(15, 5, 15, 0.05), 0.05);
    }

    #[test]
    fn clamp_holds() {
        assert_eq!(clamp_threshold(0.45, 0.05, 0.05, 0.15, 0.5), 0.5);
        assert_eq!(clamp_threshold(0.1, -0.05, 0.0, 0.15, 0.5), 0.15);
    }

    #[test]
    fn relaxes_until_one_survives() {
        let policy = ThresholdPolicy::default();
        let pool = vec![candidate("a", 0.12), candidate("b", 0.05)];
        let (kept, outcome) = policy.filter_from(0.30, pool);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id(), "a");
        assert!(outcome.relaxed());
        assert!((outcome.effective_threshold - 0.10).abs() < 1e-9);
        assert_eq!(outcome.relaxation_steps, 4);
    }

    #[test]
    fn no_relaxation_when_enough_survive() {
        let policy = ThresholdPolicy::default();
        let pool = vec![candidate("a", 0.9), candidate("b", 0.1)];
        let (kept, outcome) = policy.filter_from(0.30, pool);
        assert_eq!(kept.len(), 1);
        assert!(!outcome.relaxed());
    }

    #[test]
    fn empty_pool_is_valid() {
        let policy = ThresholdPolicy::default();
        let (kept, outcome) = policy.filter_from(0.30, Vec::new());
        assert!(kept.is_empty());
        assert_eq!(outcome.relaxation_steps, 0);
        assert_eq!(outcome.admitted, 0);
    }
}
