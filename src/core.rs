//! Extension points of the estimator.
//!
//! The minimal solver is injected: the estimator never knows how candidate
//! transforms are computed from a sample, it only scores them.

use crate::input::SolverInput;
use crate::models::Solution;

/// Minimal solver producing candidate similarity transforms from a sample.
pub trait HypothesisGenerator {
    /// Prior knowledge forwarded, unmodified, to every call.
    type Priors;

    /// Estimate candidate transforms for one minimal sample.
    ///
    /// `hypotheses` arrives empty. Returning `false` marks the sample as
    /// unusable: the iteration still counts, but nothing is scored. Returning
    /// `true` with no candidates is a valid success.
    fn generate(
        &mut self,
        input: &SolverInput,
        priors: &Self::Priors,
        hypotheses: &mut Solution,
    ) -> bool;
}

impl<G: HypothesisGenerator + ?Sized> HypothesisGenerator for &mut G {
    type Priors = G::Priors;

    fn generate(
        &mut self,
        input: &SolverInput,
        priors: &Self::Priors,
        hypotheses: &mut Solution,
    ) -> bool {
        (**self).generate(input, priors, hypotheses)
    }
}

impl<G: HypothesisGenerator + ?Sized> HypothesisGenerator for Box<G> {
    type Priors = G::Priors;

    fn generate(
        &mut self,
        input: &SolverInput,
        priors: &Self::Priors,
        hypotheses: &mut Solution,
    ) -> bool {
        (**self).generate(input, priors, hypotheses)
    }
}
