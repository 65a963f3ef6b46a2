use std::sync::Arc;

use chrono::NaiveDate;
use fair_core::models::{Domain, EvidenceSource, Origin, Query, RetrievalCandidate, SourceType};
use fair_retrieval::diversity::DiversitySelector;
use fair_retrieval::quality::QualityScorer;
use fair_retrieval::search::{combine, HybridRanker};
use fair_retrieval::snapshot::KeywordDoc;
use fair_retrieval::threshold::ThresholdPolicy;
use fair_core::config::DiversityConfig;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "compound", "interest", "budget", "savings", "insulin", "diabetes", "rate", "the", "of",
    "portfolio", "blood", "pressure", "walk", "river", "apr", "tax",
];

fn text_strategy(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..max_words).prop_map(|w| w.join(" "))
}

fn source_type() -> impl Strategy<Value = SourceType> {
    prop::sample::select(vec![
        SourceType::ClinicalGuideline,
        SourceType::AcademicResearch,
        SourceType::MedicalReference,
        SourceType::RegulatoryGuidance,
        SourceType::FinancialEducation,
        SourceType::General,
    ])
}

fn evidence_domain() -> impl Strategy<Value = Domain> {
    prop::sample::select(vec![Domain::Finance, Domain::Medical])
}

fn any_domain() -> impl Strategy<Value = Domain> {
    prop::sample::select(vec![
        Domain::Finance,
        Domain::Medical,
        Domain::CrossDomain,
        Domain::Unknown,
    ])
}

fn source(
    id: String,
    domain: Domain,
    content: String,
    source_type: SourceType,
    reliability: f64,
    published: Option<NaiveDate>,
    origin: Origin,
) -> EvidenceSource {
    EvidenceSource {
        id,
        domain,
        title: "t".to_string(),
        content,
        source_type,
        base_reliability: reliability,
        publication_date: published,
        keywords: vec![],
        url: None,
        origin,
    }
}

fn candidate_strategy() -> impl Strategy<Value = RetrievalCandidate> {
    (
        0u8..6,
        text_strategy(12),
        prop::collection::vec(-1.0f32..1.0, 4),
        0.0f64..1.0,
        0.0f64..1.2,
        any::<bool>(),
    )
        .prop_map(|(id, content, v, combined, quality, curated)| {
            let origin = if curated { Origin::Curated } else { Origin::Fetched };
            let s = source(
                format!("s{id}"),
                Domain::Finance,
                content,
                SourceType::General,
                0.5,
                None,
                origin,
            );
            let mut c = RetrievalCandidate::new(Arc::new(s), Arc::new(v));
            c.combined_score = combined;
            c.quality_score = quality;
            c
        })
}

proptest! {
    #[test]
    fn quality_never_exceeds_cap(
        domain in evidence_domain(),
        content in text_strategy(30),
        st in source_type(),
        reliability in 0.0f64..=1.0,
        days_old in prop::option::of(-400i64..20_000),
    ) {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let published = days_old.map(|d| today - chrono::Duration::days(d));
        let s = source("x".into(), domain, content, st, reliability, published, Origin::Curated);
        let q = QualityScorer::default().score_at(&s, today);
        prop_assert!(q >= 0.0);
        prop_assert!(q <= 1.2 * reliability + 1e-12, "quality {} > cap for {}", q, reliability);
    }

    #[test]
    fn threshold_always_in_bounds(text in ".{0,300}", domain in any_domain()) {
        let t = ThresholdPolicy::default().threshold_for(domain, &text);
        prop_assert!((0.15..=0.50).contains(&t), "threshold {} out of bounds", t);
    }

    #[test]
    fn combined_is_alpha_blend(
        query in text_strategy(6),
        pool in prop::collection::vec(candidate_strategy(), 0..10),
        qv in prop::collection::vec(-1.0f32..1.0, 4),
    ) {
        let mut pool = pool;
        let docs: Vec<KeywordDoc> = pool.iter().map(|c| KeywordDoc::from_text(&c.source.keyword_text())).collect();
        let refs: Vec<&KeywordDoc> = docs.iter().collect();
        let ranker = HybridRanker::default();
        let alpha = ranker.config().semantic_weight;
        ranker.score(&Query::new(query, Domain::Finance), &qv, &mut pool, &refs);
        for c in &pool {
            prop_assert!((0.0..=1.0).contains(&c.semantic_score));
            prop_assert!((0.0..=1.0).contains(&c.keyword_score));
            let expected = combine(c.semantic_score, c.keyword_score, alpha);
            prop_assert!((c.combined_score - expected).abs() < 1e-9);
            prop_assert!((c.combined_score - (alpha * c.semantic_score + (1.0 - alpha) * c.keyword_score)).abs() < 1e-9);
        }
    }

    #[test]
    fn mmr_output_unique_and_bounded(
        pool in prop::collection::vec(candidate_strategy(), 0..15),
        max in 0usize..8,
        lambda in 0.0f64..=1.0,
    ) {
        let distinct = {
            let mut ids: Vec<String> = pool.iter().map(|c| c.id().to_string()).collect();
            ids.sort();
            ids.dedup();
            ids.len()
        };
        let set = DiversitySelector::new(DiversityConfig { lambda, max_sources: max }).select(pool);
        prop_assert!(set.len() <= max);
        prop_assert_eq!(set.len(), max.min(distinct));
        let mut ids = set.ids();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
        for (i, item) in set.iter().enumerate() {
            prop_assert_eq!(item.citation, i + 1);
        }
    }
}
