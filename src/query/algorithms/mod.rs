//! The collision algorithms, one per pair of shape types.

pub use self::collision_algorithm::CollisionAlgorithm;
pub use self::convex_convex_algorithm::ConvexConvexAlgorithm;
pub use self::ray_convex_algorithm::RayConvexAlgorithm;
pub use self::ray_cuboid_algorithm::RayCuboidAlgorithm;
pub use self::ray_triangle_algorithm::RayTriangleAlgorithm;
pub use self::triangle_triangle_algorithm::TriangleTriangleAlgorithm;

mod collision_algorithm;
mod convex_convex_algorithm;
mod ray_convex_algorithm;
mod ray_cuboid_algorithm;
mod ray_triangle_algorithm;
mod triangle_triangle_algorithm;
