//! CLI error type and exit codes.

use fair_core::errors::{ConfigError, FairError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Fair(#[from] FairError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Fair(FairError::Config(err))
    }
}

impl CliError {
    /// 2 for configuration problems, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fair(FairError::Config(_)) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_exit_with_two() {
        let err = CliError::from(ConfigError::FileNotFound {
            path: "fair.toml".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn corpus_errors_exit_with_one() {
        let err = CliError::from(FairError::Corpus(
            fair_core::errors::CorpusError::UnsupportedFormat {
                extension: "csv".to_string(),
            },
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("csv"));
    }
}
