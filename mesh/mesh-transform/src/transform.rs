//! 3D transformation matrix operations.

use nalgebra::{Matrix4, Point3};

/// A 3D transformation represented as a 4x4 matrix.
///
/// Built from rotations about the coordinate axes and composed with
/// [`Transform3D::then`].
///
/// # Example
///
/// ```
/// use mesh_transform::Transform3D;
/// use nalgebra::Point3;
///
/// let quarter = std::f64::consts::FRAC_PI_2;
/// let turn = Transform3D::rotation_z(quarter).then(&Transform3D::rotation_x(quarter));
/// let p = turn.transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert!((p.z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// The 4x4 transformation matrix in column-major order.
    matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create a rotation around the X axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            1.0,   0.0,    0.0, 0.0,
            0.0, cos_a, -sin_a, 0.0,
            0.0, sin_a,  cos_a, 0.0,
            0.0,   0.0,    0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Y axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
             cos_a, 0.0, sin_a, 0.0,
               0.0, 1.0,   0.0, 0.0,
            -sin_a, 0.0, cos_a, 0.0,
               0.0, 0.0,   0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create a rotation around the Z axis.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            cos_a, -sin_a, 0.0, 0.0,
            sin_a,  cos_a, 0.0, 0.0,
              0.0,    0.0, 1.0, 0.0,
              0.0,    0.0, 0.0, 1.0,
        );
        Self { matrix }
    }

    /// Create an intrinsic X-Y-Z Euler rotation.
    ///
    /// The body rotates about its X axis, then about its new Y axis, then
    /// about its new Z axis. The resulting matrix is `Rx * Ry * Rz`.
    ///
    /// # Arguments
    ///
    /// * `x`, `y`, `z` - Rotation angles in radians
    #[must_use]
    pub fn from_euler_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::rotation_z(z)
            .then(&Self::rotation_y(y))
            .then(&Self::rotation_x(x))
    }

    /// Get the underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose this transformation with another (self then other).
    ///
    /// The result applies `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Transform a single point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Apply this transformation to every point, returning new points.
    #[must_use]
    pub fn apply_to_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }
}
