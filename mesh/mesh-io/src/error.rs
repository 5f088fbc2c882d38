//! Error types for mesh I/O operations.

use std::path::PathBuf;

use mesh_types::OutOfRangeIndex;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during mesh I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The first data token is not the `OFF` header.
    #[error("missing OFF header (found {})", .found.as_deref().unwrap_or("end of file"))]
    MissingHeader {
        /// The token found instead, if any.
        found: Option<String>,
    },

    /// The counts line is absent or not `V F [E]`.
    #[error("malformed counts line: '{line}'")]
    InvalidCounts {
        /// The offending line content.
        line: String,
    },

    /// Fewer element lines than the counts line declared.
    #[error("truncated file: expected {expected} {element} lines, found {found}")]
    Truncated {
        /// Which section ran out, `"vertex"` or `"face"`.
        element: &'static str,
        /// Count declared in the counts line.
        expected: usize,
        /// Lines actually present.
        found: usize,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        /// Position of the offending face.
        face: usize,
        /// The out-of-range index.
        index: u32,
        /// Number of vertices declared.
        vertex_count: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Whether this error describes the file's content rather than the filesystem.
    ///
    /// A missing input file counts as a format problem: the caller handed over
    /// a path that does not hold a mesh.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

impl From<OutOfRangeIndex> for IoError {
    fn from(bad: OutOfRangeIndex) -> Self {
        Self::IndexOutOfRange {
            face: bad.face,
            index: bad.index,
            vertex_count: bad.vertex_count,
        }
    }
}
