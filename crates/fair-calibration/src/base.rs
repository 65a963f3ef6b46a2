//! Base generation confidence from the answer text alone.

use fair_core::config::CalibrationConfig;

const LONG_ANSWER_CHARS: usize = 500;
const VERY_LONG_ANSWER_CHARS: usize = 1000;
const SHORT_ANSWER_CHARS: usize = 200;

/// Length heuristic: longer answers start higher, short ones lower.
/// Clamped to `[base_min, base_max]`.
pub fn base_confidence(answer: &str, config: &CalibrationConfig) -> f64 {
    let chars = answer.trim().chars().count();
    let mut base = config.base_start;
    if chars > LONG_ANSWER_CHARS {
        base += 0.10;
    }
    if chars > VERY_LONG_ANSWER_CHARS {
        base += 0.05;
    }
    if chars < SHORT_ANSWER_CHARS {
        base -= 0.10;
    }
    base.min(config.base_max).max(config.base_min)
}
