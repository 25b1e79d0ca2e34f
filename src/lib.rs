//! # gdls-ransac - Robust generalized pose-and-scale estimation
//!
//! `gdls-ransac` recovers a similarity transform (rotation, translation and
//! scale) between a world frame and a generalized camera (a rig of cameras
//! sharing one frame) from 2D-3D correspondences contaminated by outliers.
//! It runs a RANSAC hypothesize-and-test loop over minimal samples of four
//! correspondences with an adaptive, confidence-driven iteration bound.
//!
//! The minimal solver is not part of this crate: plug one in by implementing
//! [`HypothesisGenerator`](crate::core::HypothesisGenerator).
//!
//! ## Quick Start
//!
//! ```rust
//! use gdls_ransac::{
//!     Correspondence, GdlsStarEstimator, HypothesisGenerator, PinholeCamera, RansacParameters,
//!     SimilarityTransform, Solution, SolverInput,
//! };
//! use nalgebra::{Vector2, Vector3};
//!
//! // A stand-in solver that always proposes the identity transform.
//! struct IdentitySolver;
//!
//! impl HypothesisGenerator for IdentitySolver {
//!     type Priors = ();
//!
//!     fn generate(&mut self, _input: &SolverInput, _priors: &(), out: &mut Solution) -> bool {
//!         out.push_transform(&SimilarityTransform::identity());
//!         true
//!     }
//! }
//!
//! let camera = PinholeCamera::new(1.0, Vector2::zeros());
//! let data: Vec<Correspondence> = (0..6)
//!     .map(|i| {
//!         let x = i as f64;
//!         Correspondence::new(Vector3::new(x, 0.0, 1.0), Vector2::new(x, 0.0), camera.clone())
//!     })
//!     .collect();
//!
//! let params = RansacParameters::default().with_iterations(0, 100);
//! let mut estimator = GdlsStarEstimator::new(params, IdentitySolver).unwrap();
//! let estimate = estimator.estimate(&(), &data).unwrap();
//! assert_eq!(estimate.summary.inliers.len(), 6);
//! ```
//!
//! ## Modules
//!
//! - **[`estimator`]**: the RANSAC driver and its run summary
//! - **[`core`](crate::core)**: the injected minimal-solver trait
//! - **[`samplers`]**: minimal-sample drawing over a persistent permutation
//! - **[`scoring`]**: reprojection-error inlier scoring
//! - **[`termination`]**: adaptive iteration bound and confidence
//! - **[`camera`]**: camera projection capability and a pinhole model
//! - **[`input`]**: solver input built from a minimal sample
//! - **[`models`]**: similarity transforms and candidate sets
//! - **[`settings`]**: RANSAC parameters

pub mod camera;
pub mod core;
pub mod error;
pub mod estimator;
pub mod input;
pub mod models;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod termination;
pub mod types;
pub mod utils;

pub use camera::{Camera, PinholeCamera};
pub use crate::core::HypothesisGenerator;
pub use error::{EstimatorError, Result};
pub use estimator::{Estimate, GdlsStarEstimator, RansacSummary};
pub use input::SolverInput;
pub use models::{SimilarityTransform, Solution};
pub use settings::RansacParameters;
pub use types::{Correspondence, Priors, MINIMAL_SAMPLE_SIZE};
