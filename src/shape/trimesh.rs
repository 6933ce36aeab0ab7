//! Indexed triangle meshes.

use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex} which does not exist.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
    },
}

/// A triangle mesh given as a vertex buffer and an index buffer.
///
/// Each triangle is given by the indices of its three vertices, in counter-clockwise order
/// when seen from the side its normal points to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    vertex: *vertex,
                });
            }
        }

        Ok(Self { vertices, indices })
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Gets the i-th mesh element.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// The total surface area of this mesh.
    pub fn area(&self) -> Real {
        self.triangles().map(|tri| tri.area()).sum()
    }
}
