use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use fair_core::config::FairConfig;
use fair_core::models::{Domain, Query};
use fair_embeddings::EmbeddingEngine;
use fair_retrieval::store::load_corpus;
use fair_retrieval::{EvidenceStore, IndexSnapshot, RetrievalEngine};
use test_fixtures::{fixture_path, FINANCE_CORPUS, MEDICAL_CORPUS};

fn bench_retrieve(c: &mut Criterion) {
    let config = FairConfig::default();
    let embeddings = Arc::new(EmbeddingEngine::new(&config.embedding));
    let mut sources = Vec::new();
    for f in [FINANCE_CORPUS, MEDICAL_CORPUS] {
        let (mut loaded, _) = load_corpus(&fixture_path(f)).unwrap();
        sources.append(&mut loaded);
    }
    let snapshot = IndexSnapshot::build(1, EvidenceStore::new(sources), &embeddings);
    let engine = RetrievalEngine::new(&config, Arc::clone(&embeddings));

    c.bench_function("retrieve_finance", |b| {
        b.iter(|| {
            engine
                .retrieve(&snapshot, Query::new("What is compound interest?", Domain::Finance))
                .unwrap()
        })
    });

    c.bench_function("retrieve_cross_domain", |b| {
        b.iter(|| {
            engine
                .retrieve(
                    &snapshot,
                    Query::new("How does diabetes affect retirement savings?", Domain::CrossDomain),
                )
                .unwrap()
        })
    });
}

fn bench_snapshot_build(c: &mut Criterion) {
    let config = FairConfig::default();
    let embeddings = EmbeddingEngine::new(&config.embedding);
    let (sources, _) = load_corpus(&fixture_path(FINANCE_CORPUS)).unwrap();

    c.bench_function("snapshot_build_cached", |b| {
        b.iter(|| IndexSnapshot::build(1, EvidenceStore::new(sources.clone()), &embeddings))
    });
}

criterion_group!(benches, bench_retrieve, bench_snapshot_build);
criterion_main!(benches);
