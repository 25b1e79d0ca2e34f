//! Camera capability used for scoring and for building solver input.
//!
//! A generalized camera is a rig of cameras sharing one coordinate frame.
//! Every [`Camera`] here works in that shared frame: points handed to
//! [`Camera::project_point`] and rays returned from
//! [`Camera::pixel_to_unit_ray`] are expressed in it.

use nalgebra::{UnitQuaternion, Vector2, Vector3};

/// Projection capability of one camera in a generalized camera rig.
pub trait Camera {
    /// Project a point given in the generalized frame.
    ///
    /// Returns `None` when the point cannot be projected (e.g. it lies
    /// behind the camera).
    fn project_point(&self, point: &Vector3<f64>) -> Option<Vector2<f64>>;

    /// Camera center in the generalized frame.
    fn position(&self) -> Vector3<f64>;

    /// Unit-norm bearing through `pixel`, in the generalized frame.
    fn pixel_to_unit_ray(&self, pixel: &Vector2<f64>) -> Vector3<f64>;
}

/// Pinhole camera without distortion, placed inside a generalized rig.
///
/// ```text
/// p_cam = R * (p - c)
/// u = f * p_cam.x / p_cam.z + cx
/// v = f * p_cam.y / p_cam.z + cy
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PinholeCamera {
    pub focal_length: f64,
    pub principal_point: Vector2<f64>,
    /// Rotation from the generalized frame into the camera frame.
    pub orientation: UnitQuaternion<f64>,
    /// Camera center in the generalized frame.
    pub position: Vector3<f64>,
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self {
            focal_length: 1.0,
            principal_point: Vector2::zeros(),
            orientation: UnitQuaternion::identity(),
            position: Vector3::zeros(),
        }
    }
}

impl PinholeCamera {
    /// Camera at the rig origin, aligned with the rig frame.
    pub fn new(focal_length: f64, principal_point: Vector2<f64>) -> Self {
        Self {
            focal_length,
            principal_point,
            ..Self::default()
        }
    }

    /// Place the camera inside the rig.
    pub fn with_pose(mut self, orientation: UnitQuaternion<f64>, position: Vector3<f64>) -> Self {
        self.orientation = orientation;
        self.position = position;
        self
    }
}

impl Camera for PinholeCamera {
    fn project_point(&self, point: &Vector3<f64>) -> Option<Vector2<f64>> {
        let p_cam = self.orientation * (point - self.position);
        if p_cam.z <= 0.0 {
            return None;
        }
        Some(Vector2::new(
            self.focal_length * p_cam.x / p_cam.z + self.principal_point.x,
            self.focal_length * p_cam.y / p_cam.z + self.principal_point.y,
        ))
    }

    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn pixel_to_unit_ray(&self, pixel: &Vector2<f64>) -> Vector3<f64> {
        let normalized = (pixel - self.principal_point) / self.focal_length;
        let ray_cam = Vector3::new(normalized.x, normalized.y, 1.0);
        (self.orientation.inverse() * ray_cam).normalize()
    }
}
