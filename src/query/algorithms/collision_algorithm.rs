use crate::query::gjk::{self, GjkResult, JohnsonSimplex};
use crate::query::{
    Contact, ContactSet, QueryError, QueryTolerances, QueryType, Ray, RayIntersection,
};
use crate::shape::{ConvexObject, FeatureId, GeometricObject, RayShape, ShapeType};

/// An algorithm computing the collision between the two objects of a contact set.
///
/// Each algorithm handles a specific pair of shape types and is selected by a
/// [`CollisionDispatcher`](crate::query::CollisionDispatcher). Results are merged into the
/// contact set following the rules of the query type.
pub trait CollisionAlgorithm: Send + Sync {
    /// A short name of this algorithm, used by error reports.
    fn name(&self) -> &'static str;

    /// Computes the collision between `set.object_a` and `set.object_b`.
    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
        tolerances: &QueryTolerances,
    ) -> Result<(), QueryError>;
}

/// Runs `f` with the ray as the first object of `set`.
///
/// If the ray is the second object, the objects are swapped for the duration of `f` so the
/// contacts it merges are flipped back into the caller's order.
pub(crate) fn with_ray_first<'a>(
    set: &mut ContactSet<'a>,
    algorithm: &'static str,
    f: impl FnOnce(&mut ContactSet<'a>, &'a RayShape) -> Result<(), QueryError>,
) -> Result<(), QueryError> {
    let swapped = set.object_a.shape_type() != ShapeType::Ray
        && set.object_b.shape_type() == ShapeType::Ray;

    if swapped {
        set.swap_objects();
    }

    let shape_a = set.object_a.shape;
    let result = match shape_a.as_ray() {
        Some(ray) => f(set, ray),
        None => Err(QueryError::UnexpectedShape {
            algorithm,
            expected: ShapeType::Ray,
            found: shape_a.shape_type(),
        }),
    };

    if swapped {
        set.swap_objects();
    }

    result
}

/// The world-space ray of a ray shape placed by `object`.
pub(crate) fn world_ray(object: &GeometricObject, ray_shape: &RayShape) -> Ray {
    ray_shape
        .ray
        .scaled(&object.scale)
        .transform_by(&object.pose)
}

/// The convex view of `object`, or a [`QueryError::NotConvex`].
pub(crate) fn convex<'a>(object: &GeometricObject<'a>) -> Result<ConvexObject<'a>, QueryError> {
    object
        .as_convex()
        .ok_or(QueryError::NotConvex(object.shape_type()))
}

/// Merges the world-space ray hit `hit` of the ray `ray` (the first object of `set`).
pub(crate) fn merge_ray_hit(
    set: &mut ContactSet,
    ray: &Ray,
    hit: &RayIntersection,
    query_type: QueryType,
    tolerances: &QueryTolerances,
) {
    let contact = Contact::new(ray.point_at(hit.lambda), hit.normal, hit.distance(ray), true)
        .with_features(FeatureId::Unknown, hit.feature);
    set.merge(contact, query_type, tolerances);
}

/// Merges the closest-point contact between the objects of `set`, for closest-point queries
/// on objects that don't intersect.
pub(crate) fn merge_separation(
    set: &mut ContactSet,
    query_type: QueryType,
    tolerances: &QueryTolerances,
) -> Result<(), QueryError> {
    if query_type != QueryType::ClosestPoints {
        return Ok(());
    }

    let g1 = convex(&set.object_a)?;
    let g2 = convex(&set.object_b)?;

    if let Some(contact) = separation_contact(&g1, &g2, tolerances) {
        set.merge(contact, query_type, tolerances);
    }

    Ok(())
}

/// The negative-depth contact between the closest points of two separated convex objects.
///
/// Returns `None` if the objects intersect.
pub(crate) fn separation_contact(
    g1: &ConvexObject,
    g2: &ConvexObject,
    tolerances: &QueryTolerances,
) -> Option<Contact> {
    let mut simplex = JohnsonSimplex::new(tolerances.epsilon);

    match gjk::closest_points(g1, g2, QueryType::ClosestPoints, tolerances, &mut simplex) {
        GjkResult::ClosestPoints {
            point_a,
            point_b,
            normal,
            distance,
        } => Some(Contact::new(
            na::center(&point_a, &point_b),
            normal,
            -distance,
            false,
        )),
        GjkResult::Intersection | GjkResult::Separated(_) => None,
    }
}
