//! Sanity of the numbers an answer states.

use std::sync::LazyLock;

use regex::Regex;

use super::CheckOutcome;

static NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?%?").ok());

const CALCULATION_WORDS: [&str; 4] = ["calculate", "compute", "formula", "equation"];
const LARGE_VALUE: f64 = 1_000_000.0;

pub fn check(answer: &str) -> CheckOutcome {
    let numbers: Vec<&str> = match NUMBER.as_ref() {
        Some(re) => re.find_iter(answer).map(|m| m.as_str()).collect(),
        None => Vec::new(),
    };
    if numbers.is_empty() {
        return CheckOutcome::pass(1.0);
    }

    let bad_percentages: Vec<&str> = numbers
        .iter()
        .copied()
        .filter(|n| {
            n.strip_suffix('%')
                .and_then(|v| v.parse::<f64>().ok())
                .is_some_and(|v| v > 100.0)
        })
        .collect();
    if !bad_percentages.is_empty() {
        return CheckOutcome::warn(
            0.4,
            format!("suspicious percentage values: {}", bad_percentages.join(", ")),
        );
    }

    let largest = numbers
        .iter()
        .filter(|n| !n.ends_with('%'))
        .filter_map(|n| n.parse::<f64>().ok())
        .fold(f64::MIN, f64::max);
    if largest > LARGE_VALUE {
        return CheckOutcome::warn(0.6, "extremely large numerical value detected");
    }

    let lower = answer.to_lowercase();
    if numbers.len() < 2 && CALCULATION_WORDS.iter().any(|w| lower.contains(w)) {
        return CheckOutcome::warn(0.5, "calculation mentioned but results not shown");
    }

    CheckOutcome::pass(0.95)
}
