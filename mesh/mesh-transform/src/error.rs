//! Error types for mesh transformation operations.

use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur during mesh transformation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Every coordinate is zero, so there is no scale to normalize by.
    #[error("invalid model - zero scale factor")]
    ZeroExtent,

    /// Empty mesh.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// A parameter is outside its usable range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl TransformError {
    /// Whether this error is caused by the mesh geometry itself rather than
    /// by the parameters it was transformed with.
    #[must_use]
    pub const fn is_degenerate_mesh(&self) -> bool {
        matches!(self, Self::ZeroExtent | Self::EmptyMesh)
    }
}
