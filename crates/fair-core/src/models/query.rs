use serde::{Deserialize, Serialize};

use super::Domain;

/// A free-text query bound to a target domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub domain: Domain,
    /// `text` plus appended domain synonyms. Equal to `text` until expanded.
    pub expanded_text: String,
}

impl Query {
    pub fn new(text: impl Into<String>, domain: Domain) -> Self {
        let text = text.into();
        Self {
            expanded_text: text.clone(),
            text,
            domain,
        }
    }

    pub fn with_expansion(mut self, expanded_text: String) -> Self {
        self.expanded_text = expanded_text;
        self
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded_text != self.text
    }
}
