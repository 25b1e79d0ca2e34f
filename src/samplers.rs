//! Minimal-sample drawing for the hypothesize-and-test loop.

use crate::utils::UniformRandomGenerator;

/// Draws minimal samples without replacement by partially shuffling a
/// persistent permutation of the data indices.
///
/// The permutation is reset once per estimation call with
/// [`PermutationSampler::reset`] and then keeps mutating across calls to
/// [`PermutationSampler::sample`]: each draw continues the shuffle state left
/// by the previous one. For a fixed seed and call sequence the drawn samples
/// are fully reproducible.
///
/// The sampler holds mutable random state; one instance must not be shared
/// between concurrent estimation runs.
#[derive(Debug, Clone)]
pub struct PermutationSampler {
    rng: UniformRandomGenerator,
    indices: Vec<usize>,
}

impl PermutationSampler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
            indices: Vec::new(),
        }
    }

    /// Restore the permutation to `[0, 1, ..., num_data - 1]`.
    ///
    /// Reuses the existing allocation. The random stream is not reseeded.
    pub fn reset(&mut self, num_data: usize) {
        self.indices.clear();
        self.indices.extend(0..num_data);
    }

    /// Current permutation buffer.
    pub fn permutation(&self) -> &[usize] {
        &self.indices
    }

    /// Draw `out.len()` distinct indices into `out`.
    ///
    /// Position `i` swaps the buffer entry at `i` with a uniformly drawn entry
    /// in `[i, n - 1]` and emits the new entry at `i`. Returns `false` if the
    /// permutation holds fewer indices than requested.
    pub fn sample(&mut self, out: &mut [usize]) -> bool {
        let n = self.indices.len();
        if out.is_empty() || out.len() > n {
            return false;
        }

        for (i, slot) in out.iter_mut().enumerate() {
            let j = self.rng.rand_int(i, n - 1);
            self.indices.swap(i, j);
            *slot = self.indices[i];
        }
        true
    }
}
