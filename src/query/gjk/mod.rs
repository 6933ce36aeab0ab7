//! The GJK algorithm for distance computation.

pub use self::cso_point::CsoPoint;
pub use self::gjk::{closest_points, intersection_test, GjkResult};
pub use self::johnson_simplex::JohnsonSimplex;

mod cso_point;
mod gjk;
mod johnson_simplex;
