//! Keyword domain classification from the configured lexicons.

use fair_core::config::{DomainLexicon, ExpansionConfig};
use fair_core::models::Domain;
use fair_core::text::{contains_phrase, tokenize};
use fair_core::traits::IDomainClassifier;

/// Counts lexicon hits per domain. Hits in both lexicons make the query
/// cross-domain; no hits leave it unknown.
#[derive(Debug, Clone, Default)]
pub struct LexiconDomainClassifier {
    lexicons: ExpansionConfig,
}

impl LexiconDomainClassifier {
    pub fn new(lexicons: ExpansionConfig) -> Self {
        Self { lexicons }
    }

    fn hits(lexicon: &DomainLexicon, tokens: &[String]) -> usize {
        let terms = tokens.iter().filter(|t| lexicon.is_technical(t)).count();
        let phrases = lexicon
            .synonyms
            .keys()
            .filter(|k| k.contains(' ') && contains_phrase(tokens, k))
            .count();
        terms + phrases
    }
}

impl IDomainClassifier for LexiconDomainClassifier {
    fn classify(&self, query: &str) -> Domain {
        let tokens = tokenize(query);
        let finance = Self::hits(&self.lexicons.finance, &tokens);
        let medical = Self::hits(&self.lexicons.medical, &tokens);
        match (finance > 0, medical > 0) {
            (true, true) => Domain::CrossDomain,
            (true, false) => Domain::Finance,
            (false, true) => Domain::Medical,
            (false, false) => Domain::Unknown,
        }
    }
}
