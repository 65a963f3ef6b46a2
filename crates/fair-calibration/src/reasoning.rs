//! Reasoning-step extraction from answer text.

use std::sync::LazyLock;

use regex::Regex;

/// A line opening with `1.`, `2)`, `Step 3:` or `**Step 4:**`.
static STEP_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*(?:\*\*)?(?:step\s+\d+\b|\d{1,2}[.)]\s)").ok()
});

/// Number of lines that read as an explicit reasoning step.
pub fn count_reasoning_steps(answer: &str) -> usize {
    match STEP_LINE.as_ref() {
        Some(re) => re.find_iter(answer).count(),
        None => 0,
    }
}
