//! Property tests for the Wilson score interval.

use evolve_eval::{wilson_interval, WILSON_Z_95};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_interval_brackets_point_estimate(n in 1u32..10_000, frac in 0.0f64..=1.0) {
        let successes = (f64::from(n) * frac).floor() as u32;
        let p_hat = f64::from(successes) / f64::from(n);
        let (low, high) = wilson_interval(successes, n, WILSON_Z_95);

        prop_assert!(low >= 0.0);
        prop_assert!(high <= 1.0);
        prop_assert!(low <= p_hat + 1e-12, "low {} > p_hat {}", low, p_hat);
        prop_assert!(p_hat <= high + 1e-12, "p_hat {} > high {}", p_hat, high);
    }

    #[test]
    fn prop_interval_narrows_with_more_trials(successes in 0u32..50) {
        let n = successes.max(1) * 2;
        let (low_small, high_small) = wilson_interval(successes, n, WILSON_Z_95);
        let (low_big, high_big) = wilson_interval(successes * 10, n * 10, WILSON_Z_95);
        prop_assert!(high_big - low_big <= high_small - low_small + 1e-12);
    }

    #[test]
    fn prop_zero_trials_is_degenerate(successes in 0u32..100) {
        prop_assert_eq!(wilson_interval(successes, 0, WILSON_Z_95), (0.0, 0.0));
    }
}
