//! Named mesh preprocessing and augmentation over OFF files.
//!
//! This crate ties the codec in [`mesh_io`] to the transforms in
//! [`mesh_transform`]. It owns the fixed set of [`Operation`]s, the output
//! naming convention, and the text result convention used by the web layer.
//!
//! Internally everything is a typed [`AugmentResult`]. Only [`apply`] turns
//! the outcome into a string: the output path on success, or a message
//! starting with `"Error"` on failure.
//!
//! # Example
//!
//! ```no_run
//! use mesh_augment::{PUBLIC_UPLOADS_PREFIX, apply, is_error, public_url};
//!
//! let result = apply("Centering", "uploads/cube.off");
//! if !is_error(&result) {
//!     // "/static/uploads/centered_cube.off"
//!     println!("{}", public_url(&result, PUBLIC_UPLOADS_PREFIX));
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod boundary;
mod dispatch;
mod error;
mod operation;

pub use boundary::{
    ApplyResponse, MESH_FILE_TYPE, PUBLIC_UPLOADS_PREFIX, is_error, is_mesh_upload, public_url,
};
pub use dispatch::{Augmenter, apply, apply_with, describe_error};
pub use error::{AugmentError, AugmentResult};
pub use operation::{Category, Operation};

// Re-export the parameter type callers need to build an `Augmenter`.
pub use mesh_transform::AugmentParams;
