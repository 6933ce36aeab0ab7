//! Application of the Separating-Axis-Theorem (SAT) to triangles.

pub use self::sat_triangle_triangle::{
    triangle_triangle_contact, TriangleContact, TriangleTriangleContact,
    TriangleTriangleOptions,
};
pub use self::triangle_configuration::TriangleConfiguration;

mod sat_triangle_triangle;
mod triangle_configuration;
