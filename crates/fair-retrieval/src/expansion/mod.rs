//! QueryExpander: deterministic domain synonym expansion.

pub mod synonym_expander;

use fair_core::config::ExpansionConfig;
use fair_core::models::Query;
use tracing::debug;

/// Appends domain synonyms to a query. No I/O, same input gives same output.
#[derive(Debug, Clone)]
pub struct QueryExpander {
    config: ExpansionConfig,
}

impl QueryExpander {
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    /// Return `query` with `expanded_text` filled in.
    pub fn expand(&self, query: Query) -> Query {
        if !self.config.enabled {
            return query;
        }
        let expanded = synonym_expander::expand(
            &query.text,
            &self.config.lexicons(query.domain),
            self.config.max_terms,
        );
        if expanded != query.text {
            debug!(domain = %query.domain, expanded = %expanded, "query expanded");
        }
        query.with_expansion(expanded)
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self::new(ExpansionConfig::default())
    }
}
