//! Corpus fixtures for tests and benches.
//!
//! Data files live under `data/` inside this crate, so paths resolve the
//! same way from every crate in the workspace.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Finance corpus: 8 curated and 3 fetched sources, 7 on compound interest.
pub const FINANCE_CORPUS: &str = "corpus/finance.json";
/// Medical corpus: 6 curated sources.
pub const MEDICAL_CORPUS: &str = "corpus/medical.json";
/// Two valid entries among six malformed ones and a non-object.
pub const MALFORMED_CORPUS: &str = "corpus/malformed.json";
/// YAML corpus wrapped in a `sources` key, both domains.
pub const YAML_CORPUS: &str = "corpus/mixed.yaml";

pub const FINANCE_CURATED: usize = 8;
pub const FINANCE_FETCHED: usize = 3;
pub const MEDICAL_SOURCES: usize = 6;

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Raw text of a fixture file.
///
/// # Panics
/// Panics if the file can't be read.
pub fn load_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    serde_json::from_str(&load_text(relative_path))
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// All corpus files (JSON and YAML) in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let ext = path.extension()?.to_str()?;
            matches!(ext, "json" | "yaml" | "yml").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Corpus entries of a JSON fixture, unwrapping a `sources` object if present.
pub fn corpus_entries(relative_path: &str) -> Vec<serde_json::Value> {
    match load_fixture_value(relative_path) {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("sources") {
            Some(serde_json::Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
