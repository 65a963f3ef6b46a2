//! Runs the `fair` binary against the fixture corpora. No network needed:
//! embeddings use the built-in provider and generation points at a closed port.

use std::io::Write;
use std::process::Command;

use test_fixtures::{fixture_path, FINANCE_CORPUS, MALFORMED_CORPUS};

fn fair() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fair"));
    cmd.env_remove("FAIR_LOG");
    cmd
}

fn offline_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[generation]\nbase_url = \"http://127.0.0.1:1\"\ntimeout_ms = 2000\n"
    )
    .unwrap();
    file
}

#[test]
fn config_prints_effective_toml() {
    let out = fair().arg("config").output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("[retrieval]"));
    assert!(text.contains("semantic_weight = 0.7"));
}

#[test]
fn missing_config_file_exits_with_two() {
    let out = fair()
        .args(["config", "--config", "/nonexistent/fair.toml"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn index_reports_loaded_and_skipped_entries() {
    let out = fair()
        .args(["index", "--corpus"])
        .arg(fixture_path(MALFORMED_CORPUS))
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["corpus"]["skipped"].as_array().unwrap().len(), 6);
    assert_eq!(json["index"]["generation"], 1);
    assert!(json["model_version"].as_str().unwrap().starts_with("tfidf"));
}

#[test]
fn query_without_generator_still_returns_evidence() {
    let config = offline_config();
    let out = fair()
        .args(["query", "--corpus"])
        .arg(fixture_path(FINANCE_CORPUS))
        .arg("--config")
        .arg(config.path())
        .args(["--domain", "finance", "What", "is", "compound", "interest?"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(json["answer"].is_null());
    assert_eq!(json["domain"], "finance");
    assert_eq!(json["evidence"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(json["confidence"]["generation_status"], "unavailable");
}

#[test]
fn unsupported_corpus_extension_fails() {
    let out = fair()
        .args(["index", "--corpus", "corpus.csv"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}
