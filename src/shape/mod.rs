//! Shapes supported by contact3d.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
pub use self::feature_id::FeatureId;
pub use self::geometric_object::{ConvexObject, GeometricObject};
pub use self::ray_shape::RayShape;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod ball;
mod cuboid;
mod feature_id;
mod geometric_object;
mod ray_shape;
mod segment;
mod shape;
mod support_map;
mod triangle;
mod trimesh;
