//! Indexed polygon mesh.

use crate::{Face, MeshTopology, Vertex};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed polygon mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices by
/// index. Faces may have any arity of three or more.
///
/// # Invariant
///
/// Every face index is expected to lie in `[0, vertex_count)`. Meshes built
/// by hand can break this; [`IndexedMesh::first_out_of_range`] reports the
/// first violation. Manifoldness, orientation and duplicate vertices are not
/// checked anywhere.
///
/// # Example
///
/// ```
/// use mesh_types::{Face, IndexedMesh, MeshTopology, Vertex};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push(Face::triangle(0, 1, 2));
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Polygon faces as indices into the vertex array.
    pub faces: Vec<Face>,
}

/// A face index that points past the end of the vertex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeIndex {
    /// Position of the offending face.
    pub face: usize,
    /// The index value found in that face.
    pub index: u32,
    /// Number of vertices in the mesh.
    pub vertex_count: usize,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Vertex positions in order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Build a new mesh with the given positions and this mesh's faces.
    ///
    /// Used to rebuild a mesh after a vertex-only transform. The caller must
    /// supply exactly one position per vertex; extra or missing positions
    /// change the vertex count and may break the index invariant.
    #[must_use]
    pub fn with_positions(&self, positions: Vec<Point3<f64>>) -> Self {
        Self {
            vertices: positions.into_iter().map(Vertex::new).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Find the first face index outside `[0, vertex_count)`.
    ///
    /// Returns `None` when every face references existing vertices.
    #[must_use]
    pub fn first_out_of_range(&self) -> Option<OutOfRangeIndex> {
        let vertex_count = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(face, f)| {
            f.indices()
                .iter()
                .copied()
                .find(|&i| i as usize >= vertex_count)
                .map(|index| OutOfRangeIndex {
                    face,
                    index,
                    vertex_count,
                })
        })
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }
}

/// Helper function to create a unit cube mesh.
///
/// Creates a cube from (0,0,0) to (1,1,1) with six quad faces, counter-clockwise
/// when viewed from outside.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 6);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    mesh.faces.push(Face::new([0, 3, 2, 1])); // bottom, -Z
    mesh.faces.push(Face::new([4, 5, 6, 7])); // top, +Z
    mesh.faces.push(Face::new([0, 1, 5, 4])); // front, -Y
    mesh.faces.push(Face::new([3, 7, 6, 2])); // back, +Y
    mesh.faces.push(Face::new([0, 4, 7, 3])); // left, -X
    mesh.faces.push(Face::new([1, 2, 6, 5])); // right, +X

    mesh
}
