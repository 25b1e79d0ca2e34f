//! Reprojection-error inlier scoring.
//!
//! Every candidate transform is scored against all correspondences. A
//! correspondence counts as an inlier when its squared reprojection error is
//! strictly below the squared threshold; correspondences that cannot be
//! projected are skipped for that candidate.

use crate::camera::Camera;
use crate::models::{SimilarityTransform, Solution};
use crate::types::Correspondence;

/// Inlier counter tracking the best transform seen so far.
#[derive(Debug, Clone)]
pub struct InlierScorer {
    sq_threshold: f64,
    inliers: Vec<usize>,
}

impl InlierScorer {
    /// `threshold` is the reprojection error bound in pixels.
    pub fn new(threshold: f64) -> Self {
        Self {
            sq_threshold: threshold * threshold,
            inliers: Vec::new(),
        }
    }

    pub fn squared_threshold(&self) -> f64 {
        self.sq_threshold
    }

    /// Collect the inliers of `transform` into `inliers_out`.
    pub fn score<C: Camera>(
        &self,
        correspondences: &[Correspondence<C>],
        transform: &SimilarityTransform,
        inliers_out: &mut Vec<usize>,
    ) {
        inliers_out.clear();
        for (j, c) in correspondences.iter().enumerate() {
            // (R * X + t) / s places the point in the unscaled rig frame.
            let point_in_rig = transform.transform_point(&c.point);
            let Some(pixel) = c.camera.project_point(&point_in_rig) else {
                continue;
            };
            let sq_error = (pixel - c.observation).norm_squared();
            if sq_error < self.sq_threshold {
                inliers_out.push(j);
            }
        }
    }

    /// Score every candidate in `hypotheses` and keep the best one.
    ///
    /// A candidate replaces `best_solution` and `best_inliers` only when it has
    /// strictly more inliers than the current best. Returns the updated best
    /// inlier ratio; when no candidate improves on the best, returns the
    /// previous ratio plus `f64::EPSILON` so that the value fed into the
    /// iteration bound is never exactly zero.
    ///
    /// # Panics
    /// Panics if `correspondences` is empty.
    pub fn update_best_solution<C: Camera>(
        &mut self,
        correspondences: &[Correspondence<C>],
        hypotheses: &Solution,
        best_solution: &mut SimilarityTransform,
        best_inliers: &mut Vec<usize>,
    ) -> f64 {
        assert!(!correspondences.is_empty(), "no correspondences to score");
        let num_data = correspondences.len() as f64;
        let mut best_inlier_ratio = best_inliers.len() as f64 / num_data + f64::EPSILON;

        let mut inliers = std::mem::take(&mut self.inliers);
        for candidate in hypotheses.iter() {
            tracing::trace!(
                rotation = ?candidate.rotation,
                translation = ?candidate.translation,
                scale = candidate.scale,
                "scoring candidate"
            );
            self.score(correspondences, &candidate, &mut inliers);

            if inliers.len() > best_inliers.len() {
                // Swap so the previous best allocation becomes scratch space.
                std::mem::swap(best_inliers, &mut inliers);
                *best_solution = candidate;
                best_inlier_ratio = best_inliers.len() as f64 / num_data;
                tracing::trace!(
                    num_inliers = best_inliers.len(),
                    inlier_ratio = best_inlier_ratio,
                    "updated best solution"
                );
            }
        }
        self.inliers = inliers;

        best_inlier_ratio
    }
}
