//! RANSAC configuration for the generalized pose-and-scale estimator.

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};

/// Parameters controlling the hypothesize-and-test loop.
///
/// Values are checked once by [`RansacParameters::validate`], which the
/// estimator calls on construction. They are not modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacParameters {
    /// Acceptable probability of never drawing an all-inlier sample, in (0, 1).
    pub failure_probability: f64,
    /// Inlier threshold on the reprojection error, in pixels.
    pub reprojection_error_thresh: f64,
    /// Lower bound on the adaptive iteration count.
    pub min_iterations: usize,
    /// Upper bound on the iteration count; must exceed `min_iterations`.
    pub max_iterations: usize,
    /// Seed of the random source used for sampling.
    pub seed: u64,
}

impl Default for RansacParameters {
    fn default() -> Self {
        Self {
            failure_probability: 0.01,
            reprojection_error_thresh: 1.0,
            min_iterations: 10,
            max_iterations: 1000,
            seed: 67,
        }
    }
}

impl RansacParameters {
    pub fn with_failure_probability(mut self, failure_probability: f64) -> Self {
        self.failure_probability = failure_probability;
        self
    }

    pub fn with_reprojection_error_thresh(mut self, thresh: f64) -> Self {
        self.reprojection_error_thresh = thresh;
        self
    }

    pub fn with_iterations(mut self, min_iterations: usize, max_iterations: usize) -> Self {
        self.min_iterations = min_iterations;
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        // Written as negated comparisons so that NaN is rejected as well.
        if !(self.failure_probability > 0.0 && self.failure_probability < 1.0) {
            return Err(EstimatorError::invalid(
                "failure_probability",
                format!("must lie in (0, 1), got {}", self.failure_probability),
            ));
        }
        if !(self.reprojection_error_thresh > 0.0) {
            return Err(EstimatorError::invalid(
                "reprojection_error_thresh",
                format!("must be positive, got {}", self.reprojection_error_thresh),
            ));
        }
        if self.max_iterations <= self.min_iterations {
            return Err(EstimatorError::invalid(
                "max_iterations",
                format!(
                    "must exceed min_iterations ({}), got {}",
                    self.min_iterations, self.max_iterations
                ),
            ));
        }
        Ok(())
    }
}
