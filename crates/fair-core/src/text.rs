//! Tokenization shared by keyword scoring, expansion, and quality signals.

const STOPWORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "as", "at", "be", "by", "can", "do", "does", "for", "from",
    "how", "i", "if", "in", "is", "it", "its", "me", "my", "of", "on", "or", "should", "that",
    "the", "their", "this", "to", "was", "what", "when", "which", "who", "why", "will", "with",
    "you", "your",
];

/// Lowercase alphanumeric terms of at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}

pub fn is_stopword(term: &str) -> bool {
    STOPWORDS.binary_search(&term).is_ok()
}

/// Tokens with stopwords removed.
pub fn content_terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether `phrase` (one or more terms) occurs as a contiguous run in `tokens`.
pub fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let needle = tokenize(phrase);
    if needle.is_empty() || needle.len() > tokens.len() {
        return false;
    }
    tokens.windows(needle.len()).any(|w| w == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwords_sorted_for_binary_search() {
        let mut sorted = STOPWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOPWORDS);
    }

    #[test]
    fn tokenize_lowercases_and_drops_short() {
        assert_eq!(tokenize("What is a Roth IRA?"), vec!["what", "is", "roth", "ira"]);
    }

    #[test]
    fn content_terms_drop_stopwords() {
        assert_eq!(content_terms("what is compound interest"), vec!["compound", "interest"]);
    }

    #[test]
    fn phrase_matching_is_contiguous() {
        let tokens = tokenize("how does compound interest work");
        assert!(contains_phrase(&tokens, "compound interest"));
        assert!(!contains_phrase(&tokens, "interest compound"));
        assert!(!contains_phrase(&tokens, ""));
    }
}
