//! Adaptive iteration bound and final confidence.
//!
//! With inlier ratio `w` and minimal sample size `m`, a random sample is all
//! inliers with probability `w^m`. After `k` samples the chance of never
//! having drawn such a sample is `(1 - w^m)^k`; the bound picks the smallest
//! `k` pushing this below the configured failure probability.

use crate::settings::RansacParameters;
use crate::types::MINIMAL_SAMPLE_SIZE;

/// Recomputes the remaining iteration budget from the observed inlier ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationController {
    min_iterations: usize,
    max_iterations: usize,
    log_failure_prob: f64,
}

impl IterationController {
    pub fn new(params: &RansacParameters) -> Self {
        Self {
            min_iterations: params.min_iterations,
            max_iterations: params.max_iterations,
            log_failure_prob: params.failure_probability.ln(),
        }
    }

    pub fn log_failure_probability(&self) -> f64 {
        self.log_failure_prob
    }

    /// Iterations needed for the current ratio, clamped to the configured
    /// `[min_iterations, max_iterations]`.
    pub fn compute_max_iterations(&self, inlier_ratio: f64) -> usize {
        compute_max_iterations(
            inlier_ratio,
            self.log_failure_prob,
            self.min_iterations,
            self.max_iterations,
        )
    }
}

/// Number of iterations needed so that the probability of never drawing an
/// all-inlier minimal sample drops below `exp(log_failure_prob)`.
///
/// A ratio of exactly one needs no further sampling and yields
/// `min_iterations`. `f64::EPSILON` is subtracted from the log-probability so
/// that it never evaluates to zero.
///
/// # Panics
/// Panics if `inlier_ratio <= 0`.
pub fn compute_max_iterations(
    inlier_ratio: f64,
    log_failure_prob: f64,
    min_iterations: usize,
    max_iterations: usize,
) -> usize {
    assert!(
        inlier_ratio > 0.0,
        "inlier ratio must be positive, got {inlier_ratio}"
    );
    if inlier_ratio == 1.0 {
        return min_iterations;
    }

    // Log probability of drawing a sample that contains an outlier.
    let log_prob = (1.0 - inlier_ratio.powi(MINIMAL_SAMPLE_SIZE as i32)).ln() - f64::EPSILON;

    // Float-to-int `as` truncates toward zero and saturates at the bounds.
    let num_iterations = (log_failure_prob / log_prob) as usize;
    num_iterations.clamp(min_iterations, max_iterations)
}

/// Probability that at least one all-inlier minimal sample was drawn in
/// `num_iterations` iterations, given `inlier_ratio`.
pub fn confidence(inlier_ratio: f64, num_iterations: usize) -> f64 {
    1.0 - (1.0 - inlier_ratio.powi(MINIMAL_SAMPLE_SIZE as i32)).powf(num_iterations as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const LOG_P: f64 = -4.605_170_185_988_091; // ln(0.01)

    #[test]
    fn perfect_ratio_collapses_to_min_iterations() {
        assert_eq!(compute_max_iterations(1.0, LOG_P, 7, 1000), 7);
        assert_eq!(compute_max_iterations(1.0, LOG_P, 0, 1000), 0);
    }

    #[test]
    fn matches_standard_ransac_bound() {
        // ratio 0.5: ln(0.01) / ln(1 - 1/16) = 71.36...
        assert_eq!(compute_max_iterations(0.5, LOG_P, 0, 1000), 71);
        // ratio 0.8: ln(0.01) / ln(1 - 0.4096) = 8.74...
        assert_eq!(compute_max_iterations(0.8, LOG_P, 0, 1000), 8);
    }

    #[test]
    fn result_is_clamped_to_configured_range() {
        assert_eq!(compute_max_iterations(0.5, LOG_P, 100, 1000), 100);
        assert_eq!(compute_max_iterations(0.5, LOG_P, 0, 50), 50);
        assert_eq!(compute_max_iterations(0.99, LOG_P, 3, 1000), 3);
    }

    #[test]
    fn epsilon_floor_ratio_saturates_at_max_iterations() {
        // A ratio of EPSILON makes ln(1 - w^4) vanish; only the epsilon guard
        // keeps the quotient finite.
        assert_eq!(compute_max_iterations(f64::EPSILON, LOG_P, 0, 1000), 1000);
        assert_eq!(
            compute_max_iterations(f64::EPSILON, LOG_P, 0, usize::MAX),
            (LOG_P / -f64::EPSILON) as usize
        );
    }

    #[test]
    fn bound_never_leaves_configured_range() {
        for i in 1..=100 {
            let ratio = i as f64 / 100.0;
            let n = compute_max_iterations(ratio, LOG_P, 5, 500);
            assert!((5..=500).contains(&n), "ratio {ratio} gave {n}");
        }
    }

    #[test]
    #[should_panic(expected = "inlier ratio must be positive")]
    fn zero_ratio_is_a_contract_violation() {
        compute_max_iterations(0.0, LOG_P, 0, 1000);
    }

    #[test]
    fn controller_uses_parameters() {
        let params = RansacParameters::default()
            .with_failure_probability(0.01)
            .with_iterations(0, 1000);
        let controller = IterationController::new(&params);
        assert_relative_eq!(controller.log_failure_probability(), LOG_P, epsilon = 1e-12);
        assert_eq!(controller.compute_max_iterations(0.5), 71);
        assert_eq!(controller.compute_max_iterations(1.0), 0);
    }

    #[test]
    fn confidence_matches_closed_form() {
        for n in [0usize, 1, 10, 71, 500] {
            let expected = 1.0 - (1.0 - 0.5f64.powi(4)).powf(n as f64);
            assert_relative_eq!(confidence(0.5, n), expected, epsilon = 1e-15);
        }
        assert_eq!(confidence(0.5, 0), 0.0);
        assert_eq!(confidence(0.0, 1000), 0.0);
        assert_eq!(confidence(1.0, 1), 1.0);
    }
}
