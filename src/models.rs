//! Similarity transforms and candidate solution sets.

use nalgebra::{UnitQuaternion, Vector3};

/// Similarity transform from the world frame into a generalized camera frame.
///
/// A world point `p` maps to `(rotation * p + translation) / scale` in the
/// rig coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityTransform {
    pub rotation: UnitQuaternion<f64>,
    pub translation: Vector3<f64>,
    pub scale: f64,
}

impl Default for SimilarityTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl SimilarityTransform {
    pub fn new(rotation: UnitQuaternion<f64>, translation: Vector3<f64>, scale: f64) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }

    /// Identity rotation, zero translation, unit scale.
    pub fn identity() -> Self {
        Self::new(UnitQuaternion::identity(), Vector3::zeros(), 1.0)
    }

    /// Map a world point into the generalized camera frame.
    #[inline]
    pub fn transform_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        (self.rotation * point + self.translation) / self.scale
    }
}

/// Set of candidate transforms stored as three parallel sequences.
///
/// Entry `i` of each sequence belongs to the same candidate. The sequences
/// can only grow together through [`Solution::push`], so their lengths never
/// diverge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    rotations: Vec<UnitQuaternion<f64>>,
    translations: Vec<Vector3<f64>>,
    scales: Vec<f64>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rotations: Vec::with_capacity(capacity),
            translations: Vec::with_capacity(capacity),
            scales: Vec::with_capacity(capacity),
        }
    }

    /// Append one candidate.
    pub fn push(&mut self, rotation: UnitQuaternion<f64>, translation: Vector3<f64>, scale: f64) {
        self.rotations.push(rotation);
        self.translations.push(translation);
        self.scales.push(scale);
    }

    pub fn push_transform(&mut self, transform: &SimilarityTransform) {
        self.push(transform.rotation, transform.translation, transform.scale);
    }

    /// Drop all candidates, keeping the allocations.
    pub fn clear(&mut self) {
        self.rotations.clear();
        self.translations.clear();
        self.scales.clear();
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn rotations(&self) -> &[UnitQuaternion<f64>] {
        &self.rotations
    }

    pub fn translations(&self) -> &[Vector3<f64>] {
        &self.translations
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    pub fn get(&self, index: usize) -> Option<SimilarityTransform> {
        Some(SimilarityTransform::new(
            *self.rotations.get(index)?,
            self.translations[index],
            self.scales[index],
        ))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = SimilarityTransform> + '_ {
        self.rotations
            .iter()
            .zip(&self.translations)
            .zip(&self.scales)
            .map(|((r, t), s)| SimilarityTransform::new(*r, *t, *s))
    }
}

impl From<SimilarityTransform> for Solution {
    fn from(transform: SimilarityTransform) -> Self {
        let mut solution = Solution::with_capacity(1);
        solution.push_transform(&transform);
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = Vector3::new(1.0, -2.0, 3.5);
        assert_eq!(SimilarityTransform::identity().transform_point(&p), p);
    }

    #[test]
    fn transform_point_divides_by_scale() {
        let t = SimilarityTransform::new(
            UnitQuaternion::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_2),
            Vector3::new(0.0, 0.0, 2.0),
            2.0,
        );
        let q = t.transform_point(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(q, Vector3::new(0.0, 0.5, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn solution_sequences_stay_parallel() {
        let mut solution = Solution::new();
        assert!(solution.is_empty());
        solution.push(UnitQuaternion::identity(), Vector3::x(), 1.0);
        solution.push(UnitQuaternion::identity(), Vector3::y(), 3.0);

        assert_eq!(solution.len(), 2);
        assert_eq!(solution.rotations().len(), 2);
        assert_eq!(solution.translations().len(), 2);
        assert_eq!(solution.scales(), &[1.0, 3.0]);
        assert_eq!(solution.get(1).map(|t| t.translation), Some(Vector3::y()));
        assert!(solution.get(2).is_none());
        assert_eq!(solution.iter().count(), 2);

        solution.clear();
        assert!(solution.is_empty());
        assert!(solution.scales().is_empty());
    }

    #[test]
    fn single_transform_converts_to_one_entry_solution() {
        let solution = Solution::from(SimilarityTransform::identity());
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.get(0), Some(SimilarityTransform::identity()));
    }
}
