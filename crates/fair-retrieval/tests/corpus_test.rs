//! Corpus loading against the shared fixture files.

use std::io::Write;

use fair_core::errors::CorpusError;
use fair_core::models::{Domain, Origin};
use fair_retrieval::store::{load_corpus, EvidenceStore};
use test_fixtures::{
    fixture_path, FINANCE_CORPUS, FINANCE_CURATED, FINANCE_FETCHED, MALFORMED_CORPUS,
    MEDICAL_CORPUS, MEDICAL_SOURCES, YAML_CORPUS,
};

#[test]
fn finance_fixture_loads_completely() {
    let (sources, report) = load_corpus(&fixture_path(FINANCE_CORPUS)).unwrap();
    assert_eq!(report.loaded, FINANCE_CURATED + FINANCE_FETCHED);
    assert!(report.skipped.is_empty());
    let fetched = sources.iter().filter(|s| s.origin == Origin::Fetched).count();
    assert_eq!(fetched, FINANCE_FETCHED);
    assert!(sources.iter().all(|s| s.domain == Domain::Finance));
}

#[test]
fn malformed_entries_are_skipped_not_fatal() {
    let (sources, report) = load_corpus(&fixture_path(MALFORMED_CORPUS)).unwrap();
    let ids: Vec<&str> = sources.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["ok-1", "ok-2"]);
    assert_eq!(report.loaded, 2);

    let skipped: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1, 2, 3, 4, 5, 7]);
    assert_eq!(report.skipped[0].id.as_deref(), Some("bad-reliability"));
    assert!(report.skipped[4].reason.contains("duplicate"));
    assert_eq!(report.skipped[5].id, None);
}

#[test]
fn yaml_fixture_loads() {
    let (sources, report) = load_corpus(&fixture_path(YAML_CORPUS)).unwrap();
    assert_eq!(report.loaded, 3);
    let store = EvidenceStore::new(sources);
    assert_eq!(store.count_in(Domain::Finance), 2);
    assert_eq!(store.count_in(Domain::Medical), 1);
    assert!(store.get("yaml-index-funds").unwrap().publication_date.is_some());
}

#[test]
fn medical_fixture_loads() {
    let (sources, _) = load_corpus(&fixture_path(MEDICAL_CORPUS)).unwrap();
    assert_eq!(sources.len(), MEDICAL_SOURCES);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_corpus(std::path::Path::new("/nonexistent/corpus.json")).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
}

#[test]
fn broken_document_is_parse_error() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(b"[{\"id\": ").unwrap();
    let err = load_corpus(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Parse { .. }));
}
