//! Polygon faces.

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline capacity covers triangles and quads without heap allocation.
type FaceIndices = SmallVec<[u32; 4]>;

/// An ordered polygon of vertex indices.
///
/// The order of the indices is the winding order read from the file and is
/// never changed by any operation in this workspace. Arity is not enforced by
/// the type itself; the codec rejects faces with fewer than three indices.
///
/// # Example
///
/// ```
/// use mesh_types::Face;
///
/// let quad = Face::new([0, 1, 2, 3]);
/// assert_eq!(quad.arity(), 4);
/// assert_eq!(quad.indices(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    indices: FaceIndices,
}

impl Face {
    /// Create a face from any sequence of vertex indices.
    #[must_use]
    pub fn new(indices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Create a triangle face.
    #[must_use]
    pub fn triangle(a: u32, b: u32, c: u32) -> Self {
        Self::new([a, b, c])
    }

    /// Number of vertices in this polygon.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// The vertex indices in winding order.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

impl From<[u32; 3]> for Face {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::triangle(a, b, c)
    }
}

impl From<Vec<u32>> for Face {
    fn from(indices: Vec<u32>) -> Self {
        Self::new(indices)
    }
}

impl<'a> IntoIterator for &'a Face {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}
