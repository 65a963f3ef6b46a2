//! Does the answer look finished and on topic?

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::CheckOutcome;

static LONG_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b\w{4,}\b").ok());

const QUESTION_STOPWORDS: [&str; 9] = [
    "what", "when", "where", "which", "should", "would", "could", "does", "have",
];
const MIN_ANSWER_CHARS: usize = 50;

/// Words of four or more letters in the question, minus question words.
pub fn key_terms(question: &str) -> BTreeSet<String> {
    let lower = question.to_lowercase();
    let Some(re) = LONG_WORD.as_ref() else {
        return BTreeSet::new();
    };
    re.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|w| !QUESTION_STOPWORDS.contains(&w.as_str()))
        .collect()
}

pub fn check(answer: &str, question: &str) -> CheckOutcome {
    if answer.chars().count() < MIN_ANSWER_CHARS {
        return CheckOutcome::warn(0.3, "response too short");
    }
    let trimmed = answer.trim_end();
    if trimmed.ends_with("...") || trimmed.ends_with(',') {
        return CheckOutcome::warn(0.5, "response appears incomplete");
    }

    let terms = key_terms(question);
    if !terms.is_empty() {
        let lower = answer.to_lowercase();
        let addressed = terms.iter().filter(|t| lower.contains(t.as_str())).count();
        let coverage = addressed as f64 / terms.len() as f64;
        if coverage < 0.3 {
            return CheckOutcome::warn(0.4, "response doesn't address key question terms");
        }
        if coverage < 0.5 {
            return CheckOutcome::warn(0.7, "response partially addresses question");
        }
    }
    CheckOutcome::pass(0.95)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "Compound interest is interest earned on previously earned interest as well as principal.";

    #[test]
    fn question_terms() {
        let terms = key_terms("What is compound interest?");
        assert_eq!(terms.into_iter().collect::<Vec<_>>(), vec!["compound", "interest"]);
    }

    #[test]
    fn short_and_trailing() {
        assert_eq!(check("Too short.", "What is compound interest?").score, 0.3);
        let cut = format!("{LONG} and also,");
        assert_eq!(check(&cut, "What is compound interest?").score, 0.5);
    }

    #[test]
    fn coverage_levels() {
        assert_eq!(check(LONG, "What is compound interest?").score, 0.95);
        assert_eq!(
            check(LONG, "How do mortgage amortization schedules work exactly?").score,
            0.4
        );
    }
}
