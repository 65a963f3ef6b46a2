//! # fair-calibration
//!
//! Turns the signals around a generated answer into one bounded trust score.
//!
//! ```text
//! ConfidenceCalibrator
//! ├── base      (answer-length heuristic, lower bound on generation failure)
//! ├── evidence  (set size + fetched sources, capped)
//! ├── reasoning (numbered / "Step N" lines, zero on generation failure)
//! ├── safety    (external reviewer score)
//! ├── scaling   (safety and reasoning shrink when evidence is weak)
//! └── validation adjustment (AnswerValidator, clamped)
//! ```
//!
//! Everything here is a pure function of its inputs.

pub mod base;
pub mod calibrator;
pub mod reasoning;
pub mod validation;

pub use base::base_confidence;
pub use calibrator::{CalibrationInputs, ConfidenceCalibrator};
pub use reasoning::count_reasoning_steps;
pub use validation::{AnswerValidator, ValidationReport};
