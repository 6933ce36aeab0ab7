/// An identifier of a feature (vertex, edge, or face) of a shape.
///
/// This identifier is shape-dependent. For triangles, vertices and edges are numbered in the
/// order `a, b, c` and `ab, bc, ca`. For cuboids, face `i < 3` is the face with outward normal
/// `+axis(i)` and face `i >= 3` the face with outward normal `-axis(i - 3)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub enum FeatureId {
    /// Shape-dependent identifier of a vertex.
    Vertex(u32),
    /// Shape-dependent identifier of an edge.
    Edge(u32),
    /// Shape-dependent identifier of a face.
    Face(u32),
    /// Unknown identifier.
    #[default]
    Unknown,
}

impl FeatureId {
    /// Retrieves the value of the identifier if `self` is a vertex.
    pub fn vertex(self) -> Option<u32> {
        match self {
            FeatureId::Vertex(id) => Some(id),
            _ => None,
        }
    }

    /// Retrieves the value of the identifier if `self` is an edge.
    pub fn edge(self) -> Option<u32> {
        match self {
            FeatureId::Edge(id) => Some(id),
            _ => None,
        }
    }

    /// Retrieves the value of the identifier if `self` is a face.
    pub fn face(self) -> Option<u32> {
        match self {
            FeatureId::Face(id) => Some(id),
            _ => None,
        }
    }
}
