//! Lexicon-driven synonym expansion.
//!
//! E.g., "What is an APR?" → "What is an APR? annual percentage rate interest rate".

use fair_core::config::DomainLexicon;
use fair_core::text::{contains_phrase, tokenize};

/// Expand `text` with synonyms of every lexicon entry it mentions.
///
/// Entries are matched as whole-token phrases and visited in table order.
/// Synonyms already present in the query are not repeated. At most
/// `max_terms` synonyms are appended.
pub fn expand(text: &str, lexicons: &[&DomainLexicon], max_terms: usize) -> String {
    let tokens = tokenize(text);
    let mut expansions: Vec<&str> = Vec::new();

    for lexicon in lexicons {
        for (entry, synonyms) in &lexicon.synonyms {
            if !contains_phrase(&tokens, entry) {
                continue;
            }
            for synonym in synonyms {
                let already_there = contains_phrase(&tokens, synonym)
                    || expansions.iter().any(|e| e.eq_ignore_ascii_case(synonym));
                if !already_there {
                    expansions.push(synonym);
                }
            }
        }
    }

    if expansions.is_empty() {
        return text.to_string();
    }

    expansions.truncate(max_terms);
    format!("{} {}", text, expansions.join(" "))
}
