use fair_calibration::{AnswerValidator, CalibrationInputs, ConfidenceCalibrator};
use fair_core::config::CalibrationConfig;
use fair_core::models::{Domain, GenerationStatus};
use proptest::prelude::*;

fn status() -> impl Strategy<Value = GenerationStatus> {
    prop::sample::select(vec![
        GenerationStatus::Completed,
        GenerationStatus::TimedOut,
        GenerationStatus::Unavailable,
    ])
}

fn extreme_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e9f64..1e9,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn confidence_always_within_floor_and_ceiling(
        generation in status(),
        base in extreme_f64(),
        evidence in 0usize..1000,
        fetched in 0usize..1000,
        steps in 0usize..1000,
        safety in extreme_f64(),
        validation in extreme_f64(),
    ) {
        let config = CalibrationConfig::default();
        let b = ConfidenceCalibrator::new(config.clone()).calibrate(&CalibrationInputs {
            generation,
            base_confidence: base,
            evidence_count: evidence,
            fetched_count: fetched,
            reasoning_steps: steps,
            safety_score: safety,
            validation_adjustment: validation,
        });
        prop_assert!(b.confidence() >= config.floor && b.confidence() <= config.ceiling);
        prop_assert!(b.evidence_boost() <= config.evidence_cap);
        prop_assert!(b.reasoning_boost() <= config.reasoning_cap);
        prop_assert!(b.safety_boost() <= config.safety_cap);
        prop_assert!(b.validation_adjustment() >= config.validation_min);
        prop_assert!(b.validation_adjustment() <= config.validation_max);
        if !generation.is_completed() {
            prop_assert_eq!(b.reasoning_boost(), 0.0);
        }
    }

    #[test]
    fn custom_bounds_respected(
        floor in 0.0f64..0.5,
        width in 0.01f64..0.5,
        base in extreme_f64(),
        evidence in 0usize..20,
    ) {
        let config = CalibrationConfig { floor, ceiling: floor + width, ..CalibrationConfig::default() };
        let b = ConfidenceCalibrator::new(config.clone()).calibrate(&CalibrationInputs {
            generation: GenerationStatus::Completed,
            base_confidence: base,
            evidence_count: evidence,
            fetched_count: 0,
            reasoning_steps: 3,
            safety_score: 0.5,
            validation_adjustment: 0.0,
        });
        prop_assert!(b.confidence() >= config.floor && b.confidence() <= config.ceiling);
    }

    #[test]
    fn validation_adjustment_bounded(answer in ".{0,400}", question in ".{0,120}", n in 0usize..8) {
        let report = AnswerValidator::default().validate(&answer, &question, Domain::Medical, n);
        prop_assert!((-0.3..=0.1).contains(&report.confidence_adjustment));
        prop_assert!((0.0..=1.0).contains(&report.quality_score));
    }
}
