//! Core mesh types for the mesh augmentation pipeline.
//!
//! This crate provides the in-memory representation shared by the codec,
//! the transform library and the dispatcher:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`Face`] - An ordered polygon of vertex indices (arity >= 3)
//! - [`IndexedMesh`] - Vertices plus faces referencing them by index
//!
//! # Layer 0 Crate
//!
//! This crate has no I/O and no randomness. It can be used from CLI tools,
//! servers or tests without pulling in anything beyond `nalgebra`.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Face, IndexedMesh, MeshTopology, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push(Face::triangle(0, 1, 2));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(mesh.first_out_of_range().is_none());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod face;
mod mesh;
mod traits;
mod vertex;

pub use face::Face;
pub use mesh::{IndexedMesh, OutOfRangeIndex, unit_cube};
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
