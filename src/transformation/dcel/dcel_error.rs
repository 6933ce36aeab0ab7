use crate::shape::TriMeshBuilderError;

/// Error raised while building, validating, or converting a [`DcelMesh`](super::DcelMesh).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DcelError {
    /// The mesh does not contain any triangle.
    #[error("the mesh does not contain any triangle.")]
    EmptyMesh,
    /// A polygon with less than three vertices was given.
    #[error("a polygon needs at least three vertices, found {0}.")]
    DegeneratePolygon(usize),
    /// Found a triangle with two or three identical vertices, after welding.
    #[error("the triangle {0} has at least two identical vertices.")]
    DegenerateTriangle(u32),
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex} which does not exist.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
    },
    /// Two triangles share the same directed edge.
    ///
    /// Either the triangles have opposite orientations, or more than two triangles share the
    /// same edge.
    #[error("the triangles {triangle1} and {triangle2} share the directed edge {edge:?}.")]
    InconsistentOrientation {
        /// The first triangle containing the edge.
        triangle1: u32,
        /// The second triangle containing the edge.
        triangle2: u32,
        /// The vertices of the shared edge.
        edge: (u32, u32),
    },
    /// An edge references an element that does not exist.
    #[error("the edge {0} has a dangling link.")]
    DanglingLink(u32),
    /// The twin of the twin of an edge is not the edge itself.
    #[error("the twin of the twin of the edge {0} is not itself.")]
    BrokenTwin(u32),
    /// The previous edge of the next edge of an edge is not the edge itself.
    #[error("the edge {0} is not the previous edge of its next edge.")]
    BrokenCycle(u32),
    /// A face boundary or hole is not a closed cycle of edges referencing the face.
    #[error("the boundary of the face {0} is not a closed cycle of its edges.")]
    BrokenFace(u32),
    /// The edge of a vertex does not originate at that vertex.
    #[error("the edge of the vertex {0} does not originate at it.")]
    BrokenVertex(u32),
    /// The triangle mesh resulting from a conversion is invalid.
    #[error("invalid triangle mesh: {0}")]
    TriMesh(#[from] TriMeshBuilderError),
}
