//! Ray-casting related definitions and implementations.

pub use self::ray::{Ray, RayIntersection};
pub use self::ray_cuboid::{ray_cuboid_intersection, Outcode};
pub use self::ray_support_map::ray_convex_intersection;
pub use self::ray_triangle::{ray_triangle_intersection, RayTriangleHit, RayTriangleTest};

mod ray;
mod ray_cuboid;
mod ray_support_map;
mod ray_triangle;
