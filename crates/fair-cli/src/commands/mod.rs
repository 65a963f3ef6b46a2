pub mod config;
pub mod index;
pub mod query;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use fair_agent::{CorpusIndexReport, FairAgent, OllamaGenerator};
use fair_core::config::FairConfig;
use fair_core::errors::FairError;
use tracing::warn;

use crate::CliError;

/// Options shared by commands that read configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// TOML configuration file; FAIR_* environment variables still apply
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl ConfigSource {
    pub fn load(&self) -> Result<FairConfig, CliError> {
        Ok(FairConfig::load(self.config.as_deref())?)
    }
}

/// Build an agent backed by Ollama and load `corpus` into it.
///
/// The Ollama clients are blocking and own a private runtime, so the agent
/// is built, loaded and later dropped on the blocking pool, never on an
/// async worker. Pair every call with [`release`].
pub async fn agent_with_corpus(
    config: FairConfig,
    corpus: &Path,
) -> Result<(Arc<FairAgent>, CorpusIndexReport), CliError> {
    let path = corpus.to_path_buf();
    let built = tokio::task::spawn_blocking(move || {
        let generator = OllamaGenerator::from_config(&config.generation)?;
        let agent = Arc::new(FairAgent::new(config, Arc::new(generator))?);
        let report = agent.load_corpus(&path)?;
        Ok::<_, FairError>((agent, report))
    })
    .await??;
    Ok(built)
}

/// Drop the agent off the async workers.
pub async fn release(agent: Arc<FairAgent>) {
    if let Err(e) = tokio::task::spawn_blocking(move || drop(agent)).await {
        warn!(error = %e, "agent shutdown task failed");
    }
}

#[cfg(test)]
mod tests {
    use fair_core::errors::CorpusError;
    use test_fixtures::{fixture_path, FINANCE_CORPUS};

    use super::*;

    fn offline() -> FairConfig {
        let mut config = FairConfig::default();
        config.generation.base_url = "http://127.0.0.1:1".to_string();
        config
    }

    #[tokio::test]
    async fn agent_builds_and_drops_inside_the_runtime() {
        let (agent, report) = agent_with_corpus(offline(), &fixture_path(FINANCE_CORPUS))
            .await
            .unwrap();
        assert_eq!(report.index.generation, 1);
        assert!(report.index.indexed > 0);
        assert_eq!(agent.generator_name(), "ollama");
        release(agent).await;
    }

    #[tokio::test]
    async fn load_failure_surfaces_as_corpus_error() {
        let err = agent_with_corpus(offline(), Path::new("/nonexistent/corpus.json"))
            .await
            .err()
            .expect("expected corpus load failure");
        assert!(matches!(err, CliError::Fair(FairError::Corpus(CorpusError::Io { .. }))));
    }
}
