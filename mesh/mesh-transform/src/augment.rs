//! Vertex-level preprocessing and augmentation operations.
//!
//! Every function takes a slice of positions and returns a new vector of the
//! same length; the input is never mutated. Faces are not involved, so
//! topology passes through whatever the caller does with the result.
//!
//! Random operations take the random source as an argument so that callers
//! can inject a seeded generator. Each random operation also has a
//! deterministic `*_by` form that takes the drawn values directly.

use nalgebra::{Point3, Vector3};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::error::{TransformError, TransformResult};
use crate::transform::Transform3D;

/// Largest absolute coordinate over all points, or 0 for no points.
///
/// This is the "extent" used by both [`normalize`] and [`add_noise`].
#[must_use]
pub fn extent(points: &[Point3<f64>]) -> f64 {
    points
        .iter()
        .flat_map(|p| p.coords.iter())
        .fold(0.0, |max, c| c.abs().max(max))
}

/// Arithmetic mean of the points, or `None` for no points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
// Precision loss: point counts beyond 2^52 are unsupported
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Some(Point3::from(sum / points.len() as f64))
}

/// Scale points so the largest absolute coordinate becomes 1.
///
/// # Errors
///
/// Returns [`TransformError::ZeroExtent`] if every coordinate is zero (or
/// there are no points). No division is attempted in that case.
///
/// # Example
///
/// ```
/// use mesh_transform::{normalize, extent};
/// use nalgebra::Point3;
///
/// let points = [Point3::new(2.0, -4.0, 1.0), Point3::new(0.5, 0.0, 3.0)];
/// let normalized = normalize(&points).unwrap();
/// assert_eq!(extent(&normalized), 1.0);
/// ```
pub fn normalize(points: &[Point3<f64>]) -> TransformResult<Vec<Point3<f64>>> {
    let scale = extent(points);
    if scale == 0.0 {
        return Err(TransformError::ZeroExtent);
    }
    Ok(points.iter().map(|p| p / scale).collect())
}

/// Translate points so their centroid sits at the origin.
///
/// # Errors
///
/// Returns [`TransformError::EmptyMesh`] when there are no points.
pub fn center(points: &[Point3<f64>]) -> TransformResult<Vec<Point3<f64>>> {
    let c = centroid(points).ok_or(TransformError::EmptyMesh)?;
    Ok(points.iter().map(|p| Point3::from(p - c)).collect())
}

/// Euler angles in degrees, applied as an intrinsic X-Y-Z rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAngles {
    /// Rotation about X, in degrees.
    pub x: f64,
    /// Rotation about Y, in degrees.
    pub y: f64,
    /// Rotation about Z, in degrees.
    pub z: f64,
}

impl RotationAngles {
    /// Draw three independent angles uniformly from `[0, 360)`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..360.0),
            y: rng.gen_range(0.0..360.0),
            z: rng.gen_range(0.0..360.0),
        }
    }

    /// The rotation these angles describe.
    #[must_use]
    pub fn to_transform(self) -> Transform3D {
        Transform3D::from_euler_xyz(self.x.to_radians(), self.y.to_radians(), self.z.to_radians())
    }
}

/// Rotate points by fixed Euler angles.
#[must_use]
pub fn rotate_by(points: &[Point3<f64>], angles: RotationAngles) -> Vec<Point3<f64>> {
    angles.to_transform().apply_to_points(points)
}

/// Rotate points by random angles, returning the result and the angles drawn.
pub fn rotate<R: Rng + ?Sized>(
    points: &[Point3<f64>],
    rng: &mut R,
) -> (Vec<Point3<f64>>, RotationAngles) {
    let angles = RotationAngles::sample(rng);
    debug!(x = angles.x, y = angles.y, z = angles.z, "Drew rotation angles (degrees)");
    (rotate_by(points, angles), angles)
}

/// Per-axis scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    /// Factor applied to X.
    pub x: f64,
    /// Factor applied to Y.
    pub y: f64,
    /// Factor applied to Z.
    pub z: f64,
}

impl ScaleFactors {
    /// Draw three independent factors uniformly from `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidParameter`] unless `low < high` and
    /// both the bounds and the width `high - low` are finite.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        (low, high): (f64, f64),
    ) -> TransformResult<Self> {
        if !(low.is_finite() && high.is_finite() && low < high && (high - low).is_finite()) {
            return Err(TransformError::InvalidParameter {
                name: "scale_range",
                reason: format!("expected finite low < high, got [{low}, {high})"),
            });
        }
        Ok(Self {
            x: rng.gen_range(low..high),
            y: rng.gen_range(low..high),
            z: rng.gen_range(low..high),
        })
    }
}

/// Multiply each coordinate by the matching factor.
///
/// This is a plain per-component product; the output is exact.
#[must_use]
pub fn scale_by(points: &[Point3<f64>], factors: ScaleFactors) -> Vec<Point3<f64>> {
    points
        .iter()
        .map(|p| Point3::new(p.x * factors.x, p.y * factors.y, p.z * factors.z))
        .collect()
}

/// Scale points anisotropically by random per-axis factors.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] for an unusable `range`.
pub fn scale<R: Rng + ?Sized>(
    points: &[Point3<f64>],
    range: (f64, f64),
    rng: &mut R,
) -> TransformResult<(Vec<Point3<f64>>, ScaleFactors)> {
    let factors = ScaleFactors::sample(rng, range)?;
    debug!(x = factors.x, y = factors.y, z = factors.z, "Drew scale factors");
    Ok((scale_by(points, factors), factors))
}

/// Noise standard deviation: `fraction` times the extent of the points.
#[must_use]
pub fn noise_magnitude(points: &[Point3<f64>], fraction: f64) -> f64 {
    extent(points) * fraction
}

/// Add independent Gaussian noise to every coordinate.
///
/// The standard deviation is [`noise_magnitude`]. A zero-extent input gives
/// a zero magnitude and comes back unchanged; unlike [`normalize`] this is
/// not an error.
///
/// Returns the noisy points and the magnitude used.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameter`] if the magnitude is negative
/// or not finite (a negative `fraction`, or infinite coordinates).
pub fn add_noise<R: Rng + ?Sized>(
    points: &[Point3<f64>],
    fraction: f64,
    rng: &mut R,
) -> TransformResult<(Vec<Point3<f64>>, f64)> {
    let magnitude = noise_magnitude(points, fraction);
    if magnitude == 0.0 {
        debug!("Zero extent, skipping noise");
        return Ok((points.to_vec(), magnitude));
    }

    let normal = Normal::new(0.0, magnitude).map_err(|e| TransformError::InvalidParameter {
        name: "noise_fraction",
        reason: format!("noise magnitude {magnitude}: {e}"),
    })?;

    let noisy = points
        .iter()
        .map(|p| {
            Point3::new(
                p.x + normal.sample(rng),
                p.y + normal.sample(rng),
                p.z + normal.sample(rng),
            )
        })
        .collect();
    Ok((noisy, magnitude))
}
