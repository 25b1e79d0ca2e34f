//! Solver input built from a minimal sample.
//!
//! gDLS-style solvers consume the sample as rays of the generalized camera:
//! a ray origin (the observing camera center), a unit ray direction through
//! the observed pixel, and the world point the ray should hit.

use nalgebra::Vector3;

use crate::camera::Camera;
use crate::types::{Correspondence, MINIMAL_SAMPLE_SIZE};

/// Per-sample input handed to a [`HypothesisGenerator`](crate::core::HypothesisGenerator).
///
/// The three sequences are parallel: entry `i` describes sample entry `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverInput {
    pub ray_origins: Vec<Vector3<f64>>,
    pub ray_directions: Vec<Vector3<f64>>,
    pub world_points: Vec<Vector3<f64>>,
}

impl SolverInput {
    pub fn new() -> Self {
        Self::with_capacity(MINIMAL_SAMPLE_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ray_origins: Vec::with_capacity(capacity),
            ray_directions: Vec::with_capacity(capacity),
            world_points: Vec::with_capacity(capacity),
        }
    }

    /// Overwrite the input with the correspondences selected by `sample`.
    pub fn fill<C: Camera>(&mut self, correspondences: &[Correspondence<C>], sample: &[usize]) {
        self.ray_origins.clear();
        self.ray_directions.clear();
        self.world_points.clear();

        for &idx in sample {
            let c = &correspondences[idx];
            self.ray_origins.push(c.camera.position());
            self.ray_directions
                .push(c.camera.pixel_to_unit_ray(&c.observation));
            self.world_points.push(c.point);
        }
    }

    pub fn len(&self) -> usize {
        self.world_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.world_points.is_empty()
    }
}
