//! Mesh preprocessing and random augmentation.
//!
//! This crate provides the geometric half of the augmentation pipeline:
//! - Mesh transformations (translate, rotate, scale) via [`Transform3D`]
//! - Preprocessing: [`normalize`] to unit extent, [`center`] at the origin
//! - Augmentation: random [`rotate`], anisotropic [`scale`], [`add_noise`]
//!
//! All operations work on vertex positions and return new buffers; faces are
//! never touched. Randomness always comes from a caller-supplied generator,
//! so a seeded generator makes every operation reproducible.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with no I/O.
//!
//! # Example
//!
//! ```
//! use mesh_transform::{AugmentParams, center, rotate};
//! use mesh_types::unit_cube;
//!
//! let cube = unit_cube();
//! let centered = center(&cube.positions()).unwrap();
//!
//! let params = AugmentParams::new().with_seed(42);
//! let mut rng = params.rng();
//! let (rotated, angles) = rotate(&centered, &mut rng);
//! assert_eq!(rotated.len(), 8);
//! assert!((0.0..360.0).contains(&angles.x));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod augment;
mod error;
mod params;
mod transform;

pub use augment::{
    RotationAngles, ScaleFactors, add_noise, center, centroid, extent, noise_magnitude, normalize,
    rotate, rotate_by, scale, scale_by,
};
pub use error::{TransformError, TransformResult};
pub use params::{AugmentParams, DEFAULT_NOISE_FRACTION, DEFAULT_SCALE_RANGE};
pub use transform::Transform3D;
