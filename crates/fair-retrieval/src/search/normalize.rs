//! Max normalization within a candidate pool.

/// Scale scores into [0, 1] by the pool maximum.
///
/// Negative scores become 0. A pool whose maximum is not positive
/// normalizes to all zeros.
pub fn normalize_by_max(scores: &[f64]) -> Vec<f64> {
    let max = scores
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; scores.len()];
    }
    scores
        .iter()
        .map(|&s| if s.is_finite() { (s.max(0.0) / max).min(1.0) } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_becomes_one() {
        assert_eq!(normalize_by_max(&[0.5, 1.0, 0.25]), vec![0.5, 1.0, 0.25]);
        assert_eq!(normalize_by_max(&[2.0, 1.0]), vec![1.0, 0.5]);
    }

    #[test]
    fn negatives_floor_at_zero() {
        assert_eq!(normalize_by_max(&[-0.3, 0.6]), vec![0.0, 1.0]);
    }

    #[test]
    fn all_zero_stays_zero() {
        assert_eq!(normalize_by_max(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(normalize_by_max(&[-1.0]), vec![0.0]);
        assert!(normalize_by_max(&[]).is_empty());
    }
}
