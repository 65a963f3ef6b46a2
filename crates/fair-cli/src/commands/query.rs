//! `fair query`: answer one question and print the response as JSON.

use std::path::PathBuf;

use clap::Args;
use fair_agent::AgentRequest;
use fair_core::models::Domain;
use tracing::info;

use super::{agent_with_corpus, release, ConfigSource};
use crate::CliError;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Corpus file (.json, .yaml or .yml)
    #[arg(long)]
    pub corpus: PathBuf,

    /// Skip classification and use this domain (finance, medical, cross_domain, unknown)
    #[arg(long, short = 'd')]
    pub domain: Option<Domain>,

    #[command(flatten)]
    pub source: ConfigSource,

    /// Print compact single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// The question
    #[arg(required = true, trailing_var_arg = true)]
    pub text: Vec<String>,
}

impl QueryArgs {
    pub fn request(&self) -> AgentRequest {
        AgentRequest {
            query: self.text.join(" "),
            domain: self.domain,
        }
    }
}

pub async fn handle_query(args: QueryArgs) -> Result<(), CliError> {
    let config = args.source.load()?;
    let (agent, indexed) = agent_with_corpus(config, &args.corpus).await?;
    info!(
        generation = indexed.index.generation,
        sources = indexed.index.indexed,
        skipped = indexed.corpus.skipped.len(),
        "corpus ready"
    );

    let response = agent.answer(args.request()).await;
    release(agent).await;
    let response = response?;
    let rendered = if args.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{rendered}");
    Ok(())
}
