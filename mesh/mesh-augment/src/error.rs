//! Error types for the operation dispatcher.

use mesh_io::IoError;
use mesh_transform::TransformError;
use thiserror::Error;

/// Result type alias for dispatcher operations.
pub type AugmentResult<T> = Result<T, AugmentError>;

/// Errors that can occur while applying a named operation to a mesh file.
///
/// The display text of each variant is the bare cause. The dispatcher adds
/// the `Error in <operation>: ` prefix when it builds the outward message.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// The input file is missing, malformed or truncated.
    #[error("{0}")]
    Format(IoError),

    /// The output file or its directory could not be written.
    #[error("{0}")]
    Io(IoError),

    /// The mesh geometry cannot support the operation.
    #[error("{0}")]
    DegenerateMesh(TransformError),

    /// The augmentation parameters are out of range.
    #[error("{0}")]
    InvalidParameter(TransformError),

    /// The operation name is not one of the supported operations.
    #[error("invalid option selected: {name}")]
    UnknownOperation {
        /// The name that was requested.
        name: String,
    },
}

impl AugmentError {
    /// Classify a failure from loading the input mesh.
    ///
    /// Read-side OS failures stay in [`AugmentError::Io`]; everything about
    /// the file contents (and a missing file) is a format error.
    #[must_use]
    pub fn from_load(err: IoError) -> Self {
        if err.is_format_error() {
            Self::Format(err)
        } else {
            Self::Io(err)
        }
    }

    /// Classify a failure from saving the output mesh.
    #[must_use]
    pub const fn from_save(err: IoError) -> Self {
        Self::Io(err)
    }

    /// Create an unknown operation error.
    #[must_use]
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }
}

impl From<TransformError> for AugmentError {
    fn from(err: TransformError) -> Self {
        if err.is_degenerate_mesh() {
            Self::DegenerateMesh(err)
        } else {
            Self::InvalidParameter(err)
        }
    }
}
