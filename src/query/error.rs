use crate::query::QueryType;
use crate::shape::ShapeType;

/// Error indicating that a collision query was issued with inputs the selected algorithm
/// cannot handle.
///
/// These are precondition violations: they are reported as soon as they are detected and the
/// query is not attempted. Numerical degeneracies are never reported as errors, they are
/// handled by the algorithms themselves.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use contact3d::query::{ContactSet, DefaultCollisionDispatcher, CollisionDispatcher, QueryError, QueryType};
/// use contact3d::shape::{GeometricObject, Shape, ShapeType};
/// use contact3d::math::{Point, Real};
/// use contact3d::na::Isometry3;
///
/// // A custom shape without support mapping.
/// struct Cloud;
///
/// impl Shape for Cloud {
///     fn shape_type(&self) -> ShapeType {
///         ShapeType::Custom
///     }
///
///     fn contains_local_point(&self, _: &Point<Real>, _: Real) -> bool {
///         false
///     }
/// }
///
/// let cloud = Cloud;
/// let a = GeometricObject::with_pose(&cloud, Isometry3::identity());
/// let b = GeometricObject::with_pose(&cloud, Isometry3::identity());
/// let mut set = ContactSet::new(a, b);
/// let dispatcher = DefaultCollisionDispatcher::default();
///
/// assert_eq!(
///     dispatcher.compute_collision(&mut set, QueryType::Boolean),
///     Err(QueryError::NotConvex(ShapeType::Custom))
/// );
/// # }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// No collision algorithm handles the given pair of shape types.
    #[error("no collision algorithm handles the shape pair ({0:?}, {1:?}).")]
    UnsupportedShapePair(ShapeType, ShapeType),
    /// An algorithm was given a shape of the wrong type.
    #[error("the {algorithm} algorithm expected a {expected:?} shape, found {found:?}.")]
    UnexpectedShape {
        /// The name of the algorithm.
        algorithm: &'static str,
        /// The shape type expected by the algorithm.
        expected: ShapeType,
        /// The shape type it was given.
        found: ShapeType,
    },
    /// An algorithm was asked a query type it does not compute.
    #[error("the {algorithm} algorithm does not support {query_type:?} queries.")]
    UnsupportedQueryType {
        /// The name of the algorithm.
        algorithm: &'static str,
        /// The query type that was asked.
        query_type: QueryType,
    },
    /// A convex algorithm was given a shape without support mapping.
    #[error("the shape {0:?} does not have a support mapping.")]
    NotConvex(ShapeType),
}
