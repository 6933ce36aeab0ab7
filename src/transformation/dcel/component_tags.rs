use crate::transformation::dcel::{Components, DcelMesh};

/// Integer tags attached by the caller to the elements of a [`DcelMesh`].
///
/// Tags are bookkeeping data kept outside of the mesh topology: mutating or traversing the
/// mesh never changes them. Untagged elements have the tag `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentTags {
    vertices: Vec<u32>,
    edges: Vec<u32>,
    faces: Vec<u32>,
}

impl ComponentTags {
    /// Creates untagged tags sized for `mesh`.
    pub fn new(mesh: &DcelMesh) -> Self {
        Self {
            vertices: vec![0; mesh.num_vertices()],
            edges: vec![0; mesh.num_edges()],
            faces: vec![0; mesh.num_faces()],
        }
    }

    /// Tags every element of `components[i]` with `i + 1`.
    pub fn from_components(mesh: &DcelMesh, components: &[Components]) -> Self {
        let mut result = Self::new(mesh);

        for (i, component) in components.iter().enumerate() {
            let tag = i as u32 + 1;
            component.vertices.iter().for_each(|v| result.set_vertex(*v, tag));
            component.edges.iter().for_each(|e| result.set_edge(*e, tag));
            component.faces.iter().for_each(|f| result.set_face(*f, tag));
        }

        result
    }

    /// The tag of a vertex.
    pub fn vertex(&self, id: u32) -> u32 {
        self.vertices.get(id as usize).copied().unwrap_or(0)
    }

    /// The tag of a half-edge.
    pub fn edge(&self, id: u32) -> u32 {
        self.edges.get(id as usize).copied().unwrap_or(0)
    }

    /// The tag of a face.
    pub fn face(&self, id: u32) -> u32 {
        self.faces.get(id as usize).copied().unwrap_or(0)
    }

    /// Tags a vertex.
    pub fn set_vertex(&mut self, id: u32, tag: u32) {
        Self::set(&mut self.vertices, id, tag)
    }

    /// Tags a half-edge.
    pub fn set_edge(&mut self, id: u32, tag: u32) {
        Self::set(&mut self.edges, id, tag)
    }

    /// Tags a face.
    pub fn set_face(&mut self, id: u32, tag: u32) {
        Self::set(&mut self.faces, id, tag)
    }

    /// Resets every tag to `0`.
    pub fn clear(&mut self) {
        self.vertices.fill(0);
        self.edges.fill(0);
        self.faces.fill(0);
    }

    fn set(tags: &mut Vec<u32>, id: u32, tag: u32) {
        let id = id as usize;

        if id >= tags.len() {
            tags.resize(id + 1, 0);
        }

        tags[id] = tag;
    }
}
