//! Are the provided sources actually cited?

use std::sync::LazyLock;

use regex::Regex;

use super::CheckOutcome;

static CITATION: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\[Source \d+\]").ok());

pub fn count_citations(answer: &str) -> usize {
    CITATION
        .as_ref()
        .map(|re| re.find_iter(answer).count())
        .unwrap_or(0)
}

/// Expect at least one citation per provided source.
pub fn check(answer: &str, evidence_count: usize) -> CheckOutcome {
    if evidence_count == 0 {
        return CheckOutcome::pass(0.7);
    }
    let cited = count_citations(answer);
    if cited == 0 {
        return CheckOutcome::warn(0.2, "response lacks evidence citations");
    }
    if cited < evidence_count {
        let score = 0.5 + (cited as f64 / evidence_count as f64) * 0.3;
        return CheckOutcome::warn(
            score,
            format!("underutilized evidence ({cited}/{evidence_count} sources cited)"),
        );
    }
    CheckOutcome::pass(0.9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_evidence_is_neutral() {
        assert_eq!(check("anything", 0).score, 0.7);
    }

    #[test]
    fn missing_partial_full() {
        assert_eq!(check("no refs", 3).score, 0.2);
        let partial = check("see [Source 1]", 2);
        assert!((partial.score - 0.65).abs() < 1e-12);
        assert_eq!(partial.warnings.len(), 1);
        assert_eq!(check("[Source 1] and [Source 2]", 2).score, 0.9);
    }
}
