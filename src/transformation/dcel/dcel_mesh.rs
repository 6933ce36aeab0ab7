use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::math::{Point, Real};
use crate::transformation::dcel::{Components, DcelError, TraversalMarks};

/// The index used by DCEL links pointing to nothing.
pub const INVALID: u32 = u32::MAX;

/// A vertex of a DCEL mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DcelVertex {
    /// The position of this vertex.
    pub position: Point<Real>,
    /// One of the edges originating at this vertex.
    pub edge: u32,
}

/// A half-edge of a DCEL mesh.
///
/// Every half-edge has a twin going in the opposite direction. Half-edges on the boundary of
/// an open mesh have a twin with no face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DcelEdge {
    /// The vertex this edge starts at.
    pub origin: u32,
    /// The edge going in the opposite direction.
    pub twin: u32,
    /// The face on the left of this edge, or [`INVALID`] for boundary edges.
    pub face: u32,
    /// The next edge of the cycle containing this edge.
    pub next: u32,
    /// The previous edge of the cycle containing this edge.
    pub previous: u32,
}

impl Default for DcelEdge {
    fn default() -> Self {
        Self {
            origin: INVALID,
            twin: INVALID,
            face: INVALID,
            next: INVALID,
            previous: INVALID,
        }
    }
}

/// A face of a DCEL mesh.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DcelFace {
    /// One edge of the outer boundary of this face.
    pub boundary: u32,
    /// One edge of each hole of this face.
    pub holes: SmallVec<[u32; 1]>,
}

impl DcelFace {
    /// A face without holes.
    pub fn new(boundary: u32) -> Self {
        Self {
            boundary,
            holes: SmallVec::new(),
        }
    }
}

/// A polygonal mesh with a doubly-connected edge list (half-edge) topology.
///
/// Vertices, edges, and faces are stored in flat arenas and link to each other with `u32`
/// indices, [`INVALID`] meaning "none". The mesh has a root edge from which its main
/// connected component is traversed. The elements of that component are cached by
/// [`Self::vertices`], [`Self::edges`], and [`Self::faces`]; the cache is cleared by every
/// method giving mutable access to the topology.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DcelMesh {
    vertices: Vec<DcelVertex>,
    edges: Vec<DcelEdge>,
    faces: Vec<DcelFace>,
    root: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    components: OnceLock<Components>,
}

impl DcelMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of vertices of this mesh, including the ones unreachable from the root.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of half-edges of this mesh, including the ones unreachable from the root.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The number of faces of this mesh, including the ones unreachable from the root.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The vertex with the given index.
    #[inline]
    pub fn vertex(&self, id: u32) -> &DcelVertex {
        &self.vertices[id as usize]
    }

    /// The half-edge with the given index.
    #[inline]
    pub fn edge(&self, id: u32) -> &DcelEdge {
        &self.edges[id as usize]
    }

    /// The face with the given index.
    #[inline]
    pub fn face(&self, id: u32) -> &DcelFace {
        &self.faces[id as usize]
    }

    /// The root edge, from which the cached component is traversed.
    #[inline]
    pub fn root(&self) -> u32 {
        self.root
    }

    /// The vertex at the end of the edge `id`.
    #[inline]
    pub fn destination(&self, id: u32) -> u32 {
        self.edge(self.edge(id).next).origin
    }

    /// Adds a vertex with no edge, returning its index.
    pub fn add_vertex(&mut self, position: Point<Real>) -> u32 {
        self.invalidate();
        self.vertices.push(DcelVertex {
            position,
            edge: INVALID,
        });
        self.vertices.len() as u32 - 1
    }

    /// Adds a half-edge, returning its index.
    pub fn add_edge(&mut self, edge: DcelEdge) -> u32 {
        self.invalidate();
        self.edges.push(edge);
        self.edges.len() as u32 - 1
    }

    /// Adds a face, returning its index.
    pub fn add_face(&mut self, face: DcelFace) -> u32 {
        self.invalidate();
        self.faces.push(face);
        self.faces.len() as u32 - 1
    }

    /// Mutable access to a vertex.
    pub fn vertex_mut(&mut self, id: u32) -> &mut DcelVertex {
        self.invalidate();
        &mut self.vertices[id as usize]
    }

    /// Mutable access to a half-edge.
    pub fn edge_mut(&mut self, id: u32) -> &mut DcelEdge {
        self.invalidate();
        &mut self.edges[id as usize]
    }

    /// Mutable access to a face.
    pub fn face_mut(&mut self, id: u32) -> &mut DcelFace {
        self.invalidate();
        &mut self.faces[id as usize]
    }

    /// Sets the root edge.
    pub fn set_root(&mut self, edge: u32) {
        self.invalidate();
        self.root = edge;
    }

    /// Clears the cached component lists.
    pub fn invalidate(&mut self) {
        let _ = self.components.take();
    }

    /// The vertices reachable from the root edge, in traversal order.
    pub fn vertices(&self) -> &[u32] {
        &self.components().vertices
    }

    /// The half-edges reachable from the root edge, in traversal order.
    pub fn edges(&self) -> &[u32] {
        &self.components().edges
    }

    /// The faces reachable from the root edge, in traversal order.
    pub fn faces(&self) -> &[u32] {
        &self.components().faces
    }

    /// The elements reachable from the root edge, computed on first access.
    pub fn components(&self) -> &Components {
        self.components.get_or_init(|| {
            if (self.root as usize) < self.edges.len() {
                let mut marks = TraversalMarks::new();
                marks.reset(self);
                self.traverse_from(self.root, &mut marks)
            } else {
                Components::default()
            }
        })
    }

    /// An iterator through the edges of the cycle containing `start`, beginning with `start`.
    ///
    /// The iteration stops after visiting as many edges as there are in the mesh, even if the
    /// cycle is not closed.
    pub fn cycle(&self, start: u32) -> CycleIter<'_> {
        CycleIter {
            mesh: self,
            start,
            curr: start,
            remaining: self.edges.len(),
        }
    }

    /// Checks the consistency of the links of this mesh.
    ///
    /// The mesh is valid if:
    /// * every edge has a twin whose twin is itself;
    /// * every edge is the previous edge of its next edge;
    /// * the twin of every edge starts where the edge ends;
    /// * every face boundary and hole is a closed cycle of edges referencing the face;
    /// * every vertex edge originates at that vertex.
    pub fn validate(&self) -> Result<(), DcelError> {
        let num_vertices = self.vertices.len() as u32;
        let num_edges = self.edges.len() as u32;
        let num_faces = self.faces.len() as u32;

        for (id, edge) in self.edges.iter().enumerate() {
            let id = id as u32;

            if edge.origin >= num_vertices
                || edge.twin >= num_edges
                || edge.next >= num_edges
                || edge.previous >= num_edges
                || (edge.face != INVALID && edge.face >= num_faces)
            {
                return Err(DcelError::DanglingLink(id));
            }
        }

        for (id, edge) in self.edges.iter().enumerate() {
            let id = id as u32;

            if self.edge(edge.twin).twin != id {
                return Err(DcelError::BrokenTwin(id));
            }

            if self.edge(edge.next).previous != id {
                return Err(DcelError::BrokenCycle(id));
            }

            if self.edge(edge.twin).origin != self.destination(id) {
                return Err(DcelError::BrokenTwin(id));
            }
        }

        for (id, face) in self.faces.iter().enumerate() {
            let id = id as u32;

            for start in core::iter::once(face.boundary).chain(face.holes.iter().copied()) {
                if start >= num_edges || !self.is_closed_face_cycle(start, id) {
                    return Err(DcelError::BrokenFace(id));
                }
            }
        }

        for (id, vertex) in self.vertices.iter().enumerate() {
            if vertex.edge >= num_edges || self.edge(vertex.edge).origin != id as u32 {
                return Err(DcelError::BrokenVertex(id as u32));
            }
        }

        Ok(())
    }

    /// Is this mesh valid? See [`Self::validate`] for details.
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Invalid DCEL mesh: {}", err);
                false
            }
        }
    }

    /// Is this mesh valid and without boundary?
    pub fn is_closed(&self) -> bool {
        self.is_valid() && self.edges.iter().all(|e| e.face != INVALID)
    }

    /// Is this mesh valid and made only of triangles without holes?
    pub fn is_triangle_mesh(&self) -> bool {
        self.is_valid()
            && !self.faces.is_empty()
            && self
                .faces
                .iter()
                .all(|f| f.holes.is_empty() && self.cycle(f.boundary).count() == 3)
    }

    /// Is this mesh a valid polygon with two faces, one on each side?
    pub fn is_two_sided_polygon(&self) -> bool {
        if self.faces.len() != 2 || !self.is_valid() {
            return false;
        }

        let len = self.cycle(self.faces[0].boundary).count();

        len >= 3
            && self.edges.len() == 2 * len
            && self.faces.iter().all(|f| f.holes.is_empty())
            && self.cycle(self.faces[1].boundary).count() == len
            && self.edges.iter().all(|e| {
                e.face != INVALID
                    && self.edge(e.twin).face != INVALID
                    && self.edge(e.twin).face != e.face
            })
    }

    fn is_closed_face_cycle(&self, start: u32, face: u32) -> bool {
        let mut curr = start;

        for _ in 0..self.edges.len() {
            if self.edge(curr).face != face {
                return false;
            }

            curr = self.edge(curr).next;

            if curr == start {
                return true;
            }
        }

        false
    }
}

/// An iterator through the edges of a cycle of a [`DcelMesh`].
pub struct CycleIter<'a> {
    mesh: &'a DcelMesh,
    start: u32,
    curr: u32,
    remaining: usize,
}

impl Iterator for CycleIter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 || self.curr == INVALID {
            return None;
        }

        let result = self.curr;
        self.remaining -= 1;
        self.curr = self.mesh.edge(result).next;

        if self.curr == self.start {
            self.remaining = 0;
        }

        Some(result)
    }
}
