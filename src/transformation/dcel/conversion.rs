use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::math::{Point, Real};
use crate::shape::TriMesh;
use crate::transformation::dcel::{DcelEdge, DcelError, DcelFace, DcelMesh, INVALID};
use crate::utils::HashablePartialEq;

impl DcelMesh {
    /// Builds the DCEL of a triangle mesh.
    ///
    /// See [`Self::from_triangles`] for details.
    pub fn from_triangle_mesh(mesh: &TriMesh) -> Result<Self, DcelError> {
        Self::from_triangles(mesh.vertices(), mesh.indices())
    }

    /// Builds the DCEL of the triangles given by a vertex buffer and an index buffer.
    ///
    /// Vertices with identical coordinates are welded. Each triangle yields one face and three
    /// half-edges, and half-edges shared by two triangles are linked as twins. The free edges of
    /// open meshes get a twin without face, and these boundary twins are linked into cycles
    /// following the mesh boundary. The root of the result is the first half-edge of the first
    /// triangle.
    ///
    /// Unreferenced vertices are dropped.
    pub fn from_triangles(
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
    ) -> Result<Self, DcelError> {
        if indices.is_empty() {
            return Err(DcelError::EmptyMesh);
        }

        let mut result = DcelMesh::new();
        let mut welded = HashMap::new();
        let mut vertex_ids = vec![INVALID; vertices.len()];
        let mut edge_map: HashMap<(u32, u32), u32> = HashMap::new();

        for (tid, idx) in indices.iter().enumerate() {
            let tid = tid as u32;
            let mut tri = [INVALID; 3];

            for k in 0..3 {
                let vid = idx[k] as usize;
                let pos = vertices.get(vid).ok_or(DcelError::IndexOutOfBounds {
                    triangle: tid,
                    vertex: idx[k],
                })?;

                if vertex_ids[vid] == INVALID {
                    vertex_ids[vid] = match welded.entry(HashablePartialEq::new(*pos)) {
                        Entry::Occupied(entry) => *entry.get(),
                        Entry::Vacant(entry) => *entry.insert(result.add_vertex(*pos)),
                    };
                }

                tri[k] = vertex_ids[vid];
            }

            if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
                return Err(DcelError::DegenerateTriangle(tid));
            }

            let base = result.num_edges() as u32;
            let face = result.add_face(DcelFace::new(base));

            for k in 0..3u32 {
                let origin = tri[k as usize];
                let dest = tri[(k as usize + 1) % 3];
                let id = result.add_edge(DcelEdge {
                    origin,
                    twin: INVALID,
                    face,
                    next: base + (k + 1) % 3,
                    previous: base + (k + 2) % 3,
                });

                if let Some(existing) = edge_map.insert((origin, dest), id) {
                    return Err(DcelError::InconsistentOrientation {
                        triangle1: result.edge(existing).face,
                        triangle2: tid,
                        edge: (origin, dest),
                    });
                }

                if result.vertex(origin).edge == INVALID {
                    result.vertex_mut(origin).edge = id;
                }
            }
        }

        for (&(a, b), &id) in &edge_map {
            if a < b {
                if let Some(&twin) = edge_map.get(&(b, a)) {
                    result.edge_mut(id).twin = twin;
                    result.edge_mut(twin).twin = id;
                }
            }
        }

        result.close_boundaries();
        result.set_root(0);

        Ok(result)
    }

    // Adds a face-less twin to every half-edge without twin, and links them into cycles.
    fn close_boundaries(&mut self) {
        let num_inner_edges = self.num_edges() as u32;
        let mut boundary = vec![];

        for id in 0..num_inner_edges {
            if self.edge(id).twin == INVALID {
                let twin = self.add_edge(DcelEdge {
                    origin: self.destination(id),
                    twin: id,
                    ..DcelEdge::default()
                });
                self.edge_mut(id).twin = twin;
                boundary.push(twin);
            }
        }

        for &id in &boundary {
            // The boundary edge following `id` starts at the origin of its twin. Turn around
            // that vertex through the inner faces until reaching the boundary.
            let mut curr = self.edge(id).twin;

            for _ in 0..num_inner_edges {
                let incoming = self.edge(curr).previous;
                let outgoing = self.edge(incoming).twin;

                if self.edge(outgoing).face == INVALID {
                    self.edge_mut(id).next = outgoing;
                    self.edge_mut(outgoing).previous = id;
                    break;
                }

                curr = outgoing;
            }
        }
    }

    /// Builds the DCEL of a convex polygon, with one face on each side.
    ///
    /// The first face is bounded by the polygon vertices in the given order, the second face
    /// in the reverse order.
    pub fn from_convex_polygon(points: &[Point<Real>]) -> Result<Self, DcelError> {
        let n = points.len() as u32;

        if n < 3 {
            return Err(DcelError::DegeneratePolygon(points.len()));
        }

        let mut result = DcelMesh::new();
        let front = result.add_face(DcelFace::new(0));
        let back = result.add_face(DcelFace::new(n));

        for pt in points {
            let _ = result.add_vertex(*pt);
        }

        // Front edge `i` goes from `i` to `i + 1`, back edge `n + i` is its twin.
        for i in 0..n {
            let _ = result.add_edge(DcelEdge {
                origin: i,
                twin: n + i,
                face: front,
                next: (i + 1) % n,
                previous: (i + n - 1) % n,
            });
            result.vertex_mut(i).edge = i;
        }

        for i in 0..n {
            let _ = result.add_edge(DcelEdge {
                origin: (i + 1) % n,
                twin: i,
                face: back,
                next: n + (i + n - 1) % n,
                previous: n + (i + 1) % n,
            });
        }

        result.set_root(0);
        Ok(result)
    }

    /// Converts the component reachable from the root into a triangle mesh.
    ///
    /// Each face boundary is triangulated as a fan, assuming the faces are convex. Face holes
    /// are ignored. The vertices of the result are in traversal order.
    ///
    /// Fails with [`TriMeshBuilderError::EmptyIndices`](crate::shape::TriMeshBuilderError)
    /// if the root component has no face.
    pub fn to_triangle_mesh(&self) -> Result<TriMesh, DcelError> {
        let mut vertex_ids = vec![INVALID; self.num_vertices()];
        let mut vertices = Vec::with_capacity(self.vertices().len());
        let mut indices = vec![];

        for &vid in self.vertices() {
            vertex_ids[vid as usize] = vertices.len() as u32;
            vertices.push(self.vertex(vid).position);
        }

        for &fid in self.faces() {
            let face = self.face(fid);

            if !face.holes.is_empty() {
                log::debug!("DCEL to triangle mesh: ignoring the holes of the face {}.", fid);
            }

            let cycle: Vec<u32> = self
                .cycle(face.boundary)
                .map(|e| vertex_ids[self.edge(e).origin as usize])
                .collect();

            for k in 1..cycle.len().saturating_sub(1) {
                indices.push([cycle[0], cycle[k], cycle[k + 1]]);
            }
        }

        Ok(TriMesh::new(vertices, indices)?)
    }
}
