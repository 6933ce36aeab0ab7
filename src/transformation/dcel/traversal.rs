use crate::transformation::dcel::{DcelMesh, INVALID};

/// The elements of a connected component of a [`DcelMesh`], in traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Components {
    /// The vertices of the component.
    pub vertices: Vec<u32>,
    /// The half-edges of the component.
    pub edges: Vec<u32>,
    /// The faces of the component.
    pub faces: Vec<u32>,
}

/// Visited flags for traversing a [`DcelMesh`] without mutating it.
///
/// Each element stores the generation at which it was last visited. Starting a new traversal
/// increments the generation, which unmarks every element at once.
#[derive(Clone, Debug, Default)]
pub struct TraversalMarks {
    generation: u32,
    vertices: Vec<u32>,
    edges: Vec<u32>,
    faces: Vec<u32>,
}

impl TraversalMarks {
    /// Creates empty traversal marks.
    ///
    /// They must be [reset](Self::reset) with the traversed mesh before being used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unmarks every element, and resizes the marks to fit `mesh`.
    pub fn reset(&mut self, mesh: &DcelMesh) {
        self.generation = self.generation.wrapping_add(1);

        if self.generation == 0 {
            // Stale marks could match the wrapped generation.
            self.vertices.fill(0);
            self.edges.fill(0);
            self.faces.fill(0);
            self.generation = 1;
        }

        self.vertices.resize(mesh.num_vertices(), 0);
        self.edges.resize(mesh.num_edges(), 0);
        self.faces.resize(mesh.num_faces(), 0);
    }

    /// Marks a vertex, returning `false` if it was already marked.
    pub fn mark_vertex(&mut self, id: u32) -> bool {
        Self::mark(&mut self.vertices, id, self.generation)
    }

    /// Marks a half-edge, returning `false` if it was already marked.
    pub fn mark_edge(&mut self, id: u32) -> bool {
        Self::mark(&mut self.edges, id, self.generation)
    }

    /// Marks a face, returning `false` if it was already marked.
    pub fn mark_face(&mut self, id: u32) -> bool {
        Self::mark(&mut self.faces, id, self.generation)
    }

    /// Is the given half-edge marked?
    pub fn is_edge_marked(&self, id: u32) -> bool {
        self.edges.get(id as usize) == Some(&self.generation)
    }

    fn mark(marks: &mut [u32], id: u32, generation: u32) -> bool {
        match marks.get_mut(id as usize) {
            Some(mark) if *mark != generation => {
                *mark = generation;
                true
            }
            _ => false,
        }
    }
}

impl DcelMesh {
    /// Collects the elements connected to the edge `start` that are not marked yet.
    ///
    /// The traversal follows the `next`, `previous`, and `twin` links of the edges, the edge of
    /// each vertex, and the boundary and holes of each face. It uses an explicit work-stack.
    /// The visited elements are marked in `marks`, which must have been
    /// [reset](TraversalMarks::reset) with this mesh.
    pub fn traverse_from(&self, start: u32, marks: &mut TraversalMarks) -> Components {
        let mut result = Components::default();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if (id as usize) >= self.num_edges() || !marks.mark_edge(id) {
                continue;
            }

            result.edges.push(id);
            let edge = self.edge(id);

            if marks.mark_vertex(edge.origin) {
                result.vertices.push(edge.origin);
                stack.push(self.vertex(edge.origin).edge);
            }

            if edge.face != INVALID && marks.mark_face(edge.face) {
                result.faces.push(edge.face);
                let face = self.face(edge.face);
                stack.extend(face.holes.iter().rev().copied());
                stack.push(face.boundary);
            }

            stack.extend([edge.previous, edge.twin, edge.next]);
        }

        result
    }

    /// Computes all the connected components of this mesh.
    ///
    /// The component containing the root edge is the first one.
    pub fn connected_components(&self) -> Vec<Components> {
        let mut marks = TraversalMarks::new();
        let mut result = vec![];
        marks.reset(self);

        let starts = core::iter::once(self.root()).chain(0..self.num_edges() as u32);

        for start in starts {
            if (start as usize) < self.num_edges() && !marks.is_edge_marked(start) {
                result.push(self.traverse_from(start, &mut marks));
            }
        }

        result
    }
}
