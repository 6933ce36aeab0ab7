//! Collision queries between geometric objects.
//!
//! # General case
//! A query is described by a [`ContactSet`] holding the two [`GeometricObject`]s involved,
//! and a [`QueryType`] selecting what must be computed:
//!
//! * [`QueryType::Boolean`] to determine if both objects touch.
//! * [`QueryType::Contacts`] to compute their penetrating contacts.
//! * [`QueryType::ClosestPoints`] to compute their closest points, even if they are separated.
//!
//! The [`DefaultCollisionDispatcher`] selects the algorithm handling the pair of shapes and
//! merges its results into the contact set. Its `have_contact`, `contacts`, and
//! `closest_points` methods wrap the most common uses.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks of the collision
//! algorithms: ray-casting on cuboids, convex shapes, and triangles, the separating-axis test
//! between triangles, and the closest points between segments. They work on world-space (or
//! local-space) geometry directly, without dispatch.
//!
//! [`GeometricObject`]: crate::shape::GeometricObject

pub use self::contact_set::{Contact, ContactArena, ContactHandle, ContactSet, QueryType};
pub use self::dispatcher::{
    CollisionDispatcher, CollisionDispatcherChain, DefaultCollisionDispatcher,
};
pub use self::error::QueryError;
pub use self::ray::{Ray, RayIntersection};
pub use self::tolerances::{QueryTolerances, MAX_GJK_ITERATIONS, MAX_RAY_CAST_ITERATIONS};

pub mod algorithms;
pub mod closest_points;
mod contact_set;
mod dispatcher;
mod error;
pub mod gjk;
mod ray;
pub mod sat;
mod tolerances;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::ray::{
        ray_convex_intersection, ray_cuboid_intersection, ray_triangle_intersection, Outcode,
        RayTriangleHit, RayTriangleTest,
    };
    pub use super::sat::*;
}
