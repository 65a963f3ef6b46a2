//! `fair index`: load and embed a corpus, then report what happened.
//!
//! With `embedding.cache_path` set, the embeddings persist and later
//! queries against the same corpus skip recomputation.

use std::path::PathBuf;

use clap::Args;
use fair_agent::CorpusIndexReport;
use fair_embeddings::{CacheStatsSnapshot, EmbeddingEngine};
use serde::Serialize;

use super::{agent_with_corpus, release, ConfigSource};
use crate::CliError;

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Corpus file (.json, .yaml or .yml)
    #[arg(long)]
    pub corpus: PathBuf,

    #[command(flatten)]
    pub source: ConfigSource,
}

#[derive(Debug, Serialize)]
pub struct IndexSummary<'a> {
    #[serde(flatten)]
    pub report: &'a CorpusIndexReport,
    pub model_version: &'a str,
    pub provider: &'a str,
    pub cache: CacheStatsSnapshot,
}

impl<'a> IndexSummary<'a> {
    pub fn new(report: &'a CorpusIndexReport, engine: &'a EmbeddingEngine) -> Self {
        Self {
            report,
            model_version: engine.model_version(),
            provider: engine.active_provider(),
            cache: engine.cache_stats(),
        }
    }
}

pub async fn handle_index(args: IndexArgs) -> Result<(), CliError> {
    let config = args.source.load()?;
    let (agent, report) = agent_with_corpus(config, &args.corpus).await?;
    let rendered = serde_json::to_string_pretty(&IndexSummary::new(&report, agent.embeddings()));
    release(agent).await;
    println!("{}", rendered?);
    Ok(())
}
