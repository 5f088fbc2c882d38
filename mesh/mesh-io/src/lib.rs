//! Mesh file I/O for the augmentation pipeline.
//!
//! This crate owns the one on-disk mesh format the pipeline understands,
//! OFF (Object File Format). No other crate touches mesh file bytes.
//!
//! - [`load_off`] / [`save_off`] work on paths
//! - [`read_off`] / [`write_off`] work on any reader or writer
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_off, save_off};
//!
//! // Load a mesh
//! let mesh = load_off("model.off").unwrap();
//!
//! // Save it elsewhere; parent directories are created as needed
//! save_off(&mesh, "out/model.off").unwrap();
//! ```
//!
//! # Format Detection
//!
//! There is a single supported format. [`is_off_path`] checks an extension
//! for callers that need to route uploads before decoding.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod off;

pub use error::{IoError, IoResult};
pub use off::{OFF_HEADER, load_off, read_off, save_off, write_off};

use std::path::Path;

/// Canonical file extension for OFF meshes.
pub const OFF_EXTENSION: &str = "off";

/// Check whether a path carries the `.off` extension (case-insensitive).
///
/// # Example
///
/// ```
/// use mesh_io::is_off_path;
///
/// assert!(is_off_path("uploads/bunny.OFF"));
/// assert!(!is_off_path("uploads/bunny.stl"));
/// ```
#[must_use]
pub fn is_off_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(OFF_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_path_detection() {
        assert!(is_off_path("model.off"));
        assert!(is_off_path("model.OFF"));
        assert!(is_off_path("/path/to/model.off"));
        assert!(!is_off_path("model.obj"));
        assert!(!is_off_path("model"));
        assert!(!is_off_path(""));
        assert!(!is_off_path("off"));
    }
}
