//! Doubly-connected edge list (half-edge) meshes.
//!
//! A [`DcelMesh`] stores its vertices, half-edges, and faces in flat arenas linked by `u32`
//! indices. It can be built from an indexed triangle mesh or a convex polygon, validated,
//! traversed without recursion, and converted back into a triangle mesh.
//!
//! Traversals take the mesh by shared reference: their visited flags live in
//! [`TraversalMarks`], and caller bookkeeping lives in [`ComponentTags`].

pub use self::component_tags::ComponentTags;
pub use self::dcel_error::DcelError;
pub use self::dcel_mesh::{CycleIter, DcelEdge, DcelFace, DcelMesh, DcelVertex, INVALID};
pub use self::traversal::{Components, TraversalMarks};

mod component_tags;
mod conversion;
mod dcel_error;
mod dcel_mesh;
mod traversal;
