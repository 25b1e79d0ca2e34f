//! Error types for the estimator.
//!
//! Both variants describe caller mistakes. They are reported before any
//! sampling happens and never mid-run.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, EstimatorError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// A RANSAC parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Fewer correspondences than a minimal sample needs.
    #[error("not enough correspondences: need at least {required}, got {found}")]
    NotEnoughCorrespondences { required: usize, found: usize },
}

impl EstimatorError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EstimatorError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
