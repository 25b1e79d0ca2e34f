//! Core shared types for generalized pose-and-scale estimation.
//!
//! Correspondences and priors are owned by the caller; the estimator only
//! reads them. Priors are forwarded to the hypothesis generator untouched.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::camera::PinholeCamera;

/// Number of correspondences in a minimal sample.
pub const MINIMAL_SAMPLE_SIZE: usize = 4;

/// A 2D observation of a 3D world point, seen by one camera of a rig.
#[derive(Debug, Clone, PartialEq)]
pub struct Correspondence<C = PinholeCamera> {
    /// World point.
    pub point: Vector3<f64>,
    /// Observed pixel.
    pub observation: Vector2<f64>,
    /// Camera that observed the point.
    pub camera: C,
}

impl<C> Correspondence<C> {
    pub fn new(point: Vector3<f64>, observation: Vector2<f64>, camera: C) -> Self {
        Self {
            point,
            observation,
            camera,
        }
    }
}

/// Scale and gravity priors consumed by gDLS*-style minimal solvers.
///
/// A penalty of zero disables the corresponding prior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Priors {
    pub scale_prior: f64,
    pub scale_penalty: f64,
    /// Gravity direction expressed in the generalized camera frame.
    pub gravity_downward: Vector3<f64>,
    pub gravity_penalty: f64,
}

impl Default for Priors {
    fn default() -> Self {
        Self {
            scale_prior: 1.0,
            scale_penalty: 0.0,
            gravity_downward: Vector3::new(0.0, -1.0, 0.0),
            gravity_penalty: 0.0,
        }
    }
}
