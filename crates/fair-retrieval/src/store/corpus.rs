//! Corpus file loading.
//!
//! Accepts a list of entries or `{ "sources": [...] }`, in JSON or YAML.
//! Every entry is parsed on its own; a bad entry is skipped and reported.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use fair_core::errors::CorpusError;
use fair_core::models::{Domain, EvidenceSource, Origin, SourceType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Json,
    Yaml,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CorpusError::UnsupportedFormat { extension: ext }),
        }
    }
}

/// An entry that did not make it into the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Outcome of loading one corpus file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusLoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    domain: Domain,
    title: String,
    content: String,
    source_type: SourceType,
    reliability_score: f64,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    publication_date: Option<DateField>,
    #[serde(default)]
    origin: Option<Origin>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateField {
    Year(i32),
    Text(String),
}

/// Read and parse a corpus file.
pub fn load_corpus(path: &Path) -> Result<(Vec<EvidenceSource>, CorpusLoadReport), CorpusError> {
    let format = CorpusFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let (sources, report) = parse_corpus(&text, format).map_err(|e| match e {
        CorpusError::Parse { reason, .. } => CorpusError::Parse {
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })?;
    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped.len(),
        "corpus file parsed"
    );
    Ok((sources, report))
}

/// Parse corpus text. Only a document that is not a list of entries is an error.
pub fn parse_corpus(
    text: &str,
    format: CorpusFormat,
) -> Result<(Vec<EvidenceSource>, CorpusLoadReport), CorpusError> {
    let doc: Value = match format {
        CorpusFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        CorpusFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    }
    .map_err(|reason| CorpusError::Parse {
        path: "<string>".to_string(),
        reason,
    })?;

    let entries = match doc {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("sources") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(CorpusError::Parse {
                    path: "<string>".to_string(),
                    reason: "expected a list or an object with a `sources` list".to_string(),
                })
            }
        },
        Value::Null => Vec::new(),
        _ => {
            return Err(CorpusError::Parse {
                path: "<string>".to_string(),
                reason: "expected a list of sources".to_string(),
            })
        }
    };

    Ok(parse_entries(entries))
}

fn parse_entries(entries: Vec<Value>) -> (Vec<EvidenceSource>, CorpusLoadReport) {
    let mut sources = Vec::with_capacity(entries.len());
    let mut report = CorpusLoadReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, value) in entries.into_iter().enumerate() {
        let id_hint = value.get("id").and_then(Value::as_str).map(str::to_string);
        let outcome = parse_entry(value).and_then(|source| {
            if seen.contains(&source.id) {
                Err(format!("duplicate id '{}'", source.id))
            } else {
                Ok(source)
            }
        });
        match outcome {
            Ok(source) => {
                seen.insert(source.id.clone());
                sources.push(source);
            }
            Err(reason) => {
                warn!(index, id = ?id_hint, %reason, "skipping corpus entry");
                report.skipped.push(SkippedEntry {
                    index,
                    id: id_hint,
                    reason,
                });
            }
        }
    }

    report.loaded = sources.len();
    (sources, report)
}

fn parse_entry(value: Value) -> Result<EvidenceSource, String> {
    let raw: RawEntry = serde_json::from_value(value).map_err(|e| e.to_string())?;
    let publication_date = raw.publication_date.map(parse_date).transpose()?;
    let source = EvidenceSource {
        id: raw.id.trim().to_string(),
        domain: raw.domain,
        title: raw.title,
        content: raw.content,
        source_type: raw.source_type,
        base_reliability: raw.reliability_score,
        publication_date,
        keywords: raw.keywords,
        url: raw.url.filter(|u| !u.trim().is_empty()),
        origin: raw.origin.unwrap_or_default(),
    };
    source.validate()?;
    Ok(source)
}

/// `YYYY-MM-DD`, or a bare year taken as January 1st.
fn parse_date(field: DateField) -> Result<NaiveDate, String> {
    let (text, year) = match field {
        DateField::Year(y) => (y.to_string(), Some(y)),
        DateField::Text(s) => {
            let trimmed = s.trim().to_string();
            let year = trimmed.parse::<i32>().ok();
            (trimmed, year)
        }
    };
    if let Some(y) = year {
        return NaiveDate::from_ymd_opt(y, 1, 1)
            .ok_or_else(|| format!("invalid publication year '{text}'"));
    }
    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .map_err(|_| format!("invalid publication_date '{text}'"))
}
