//! Robust generalized pose-and-scale estimation with adaptive RANSAC.
//!
//! The estimator samples four correspondences, asks an injected
//! [`HypothesisGenerator`] for candidate similarity transforms, keeps the
//! candidate with the largest inlier set and shrinks the iteration budget as
//! the inlier ratio improves.

use crate::camera::Camera;
use crate::core::HypothesisGenerator;
use crate::error::{EstimatorError, Result};
use crate::input::SolverInput;
use crate::models::{SimilarityTransform, Solution};
use crate::samplers::PermutationSampler;
use crate::scoring::InlierScorer;
use crate::settings::RansacParameters;
use crate::termination::{self, IterationController};
use crate::types::{Correspondence, MINIMAL_SAMPLE_SIZE};

/// Statistics of one estimation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RansacSummary {
    /// Iterations executed, including those whose sample was rejected.
    pub num_iterations: usize,
    /// Candidate transforms produced over the whole run.
    pub num_hypotheses: usize,
    /// Indices of the correspondences consistent with the returned transform.
    pub inliers: Vec<usize>,
    /// Probability that an all-inlier sample was drawn, in `[0, 1)`.
    pub confidence: f64,
}

/// Best transform and the statistics of the run that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub solution: SimilarityTransform,
    pub summary: RansacSummary,
}

/// RANSAC estimator for similarity transforms of a generalized camera.
///
/// The estimator owns mutable state: the random source and the sampling
/// permutation. `estimate` therefore takes `&mut self`; use one instance per
/// thread. The random source is seeded once in [`GdlsStarEstimator::new`],
/// so repeated calls on the same instance continue one random stream while
/// two fresh instances with the same seed reproduce each other exactly.
#[derive(Debug)]
pub struct GdlsStarEstimator<G> {
    params: RansacParameters,
    generator: G,
    sampler: PermutationSampler,
    scorer: InlierScorer,
    controller: IterationController,
}

impl<G: HypothesisGenerator> GdlsStarEstimator<G> {
    /// Validate `params` and build an estimator around `generator`.
    pub fn new(params: RansacParameters, generator: G) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            generator,
            sampler: PermutationSampler::from_seed(params.seed),
            scorer: InlierScorer::new(params.reprojection_error_thresh),
            controller: IterationController::new(&params),
        })
    }

    pub fn params(&self) -> &RansacParameters {
        &self.params
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    pub fn into_generator(self) -> G {
        self.generator
    }

    /// Run the hypothesize-and-test loop on `correspondences`.
    ///
    /// Returns the transform with the most inliers. If no sample ever yields
    /// a hypothesis, the identity transform is returned with no inliers and a
    /// confidence of zero.
    pub fn estimate<C: Camera>(
        &mut self,
        priors: &G::Priors,
        correspondences: &[Correspondence<C>],
    ) -> Result<Estimate> {
        if correspondences.len() < MINIMAL_SAMPLE_SIZE {
            return Err(EstimatorError::NotEnoughCorrespondences {
                required: MINIMAL_SAMPLE_SIZE,
                found: correspondences.len(),
            });
        }

        self.sampler.reset(correspondences.len());

        let mut summary = RansacSummary::default();
        let mut best_solution = SimilarityTransform::identity();
        let mut sample = [0usize; MINIMAL_SAMPLE_SIZE];
        let mut input = SolverInput::new();
        let mut hypotheses = Solution::new();
        let mut inlier_ratio = 0.0;
        let mut max_iterations = self.params.max_iterations;

        while summary.num_iterations < max_iterations {
            summary.num_iterations += 1;

            // The permutation always holds at least a minimal sample here.
            let sampled = self.sampler.sample(&mut sample);
            debug_assert!(sampled);

            input.fill(correspondences, &sample);
            hypotheses.clear();
            if !self.generator.generate(&input, priors, &mut hypotheses) {
                tracing::trace!(?sample, "failed to estimate hypotheses, skipping sample");
                continue;
            }

            summary.num_hypotheses += hypotheses.len();
            tracing::trace!(num_candidates = hypotheses.len(), "generated hypotheses");

            inlier_ratio = self.scorer.update_best_solution(
                correspondences,
                &hypotheses,
                &mut best_solution,
                &mut summary.inliers,
            );

            max_iterations = self.controller.compute_max_iterations(inlier_ratio);
        }

        summary.confidence = termination::confidence(inlier_ratio, summary.num_iterations);
        tracing::debug!(
            iterations = summary.num_iterations,
            hypotheses = summary.num_hypotheses,
            inliers = summary.inliers.len(),
            inlier_ratio,
            confidence = summary.confidence,
            "robust estimation finished"
        );

        Ok(Estimate {
            solution: best_solution,
            summary,
        })
    }
}
