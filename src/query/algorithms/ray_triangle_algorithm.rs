use crate::query::algorithms::collision_algorithm::{
    convex, merge_ray_hit, merge_separation, with_ray_first, world_ray,
};
use crate::query::algorithms::CollisionAlgorithm;
use crate::query::gjk::{self, GjkResult, JohnsonSimplex};
use crate::query::ray::{ray_convex_intersection, ray_triangle_intersection, RayTriangleTest};
use crate::query::{Contact, ContactSet, QueryError, QueryTolerances, QueryType, RayIntersection};
use crate::shape::{FeatureId, ShapeType};

/// Ray-casting on a triangle.
///
/// The exact ray/plane intersection is used whenever it is well-conditioned. Degenerate
/// triangles and rays parallel to the triangle plane are handled by GJK instead.
#[derive(Copy, Clone, Debug, Default)]
pub struct RayTriangleAlgorithm;

impl CollisionAlgorithm for RayTriangleAlgorithm {
    fn name(&self) -> &'static str {
        "ray-triangle"
    }

    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
        tolerances: &QueryTolerances,
    ) -> Result<(), QueryError> {
        with_ray_first(set, self.name(), |set, ray_shape| {
            let shape_b = set.object_b.shape;
            let triangle = shape_b
                .as_triangle()
                .ok_or(QueryError::UnexpectedShape {
                    algorithm: self.name(),
                    expected: ShapeType::Triangle,
                    found: shape_b.shape_type(),
                })?
                .scaled_and_transformed(&set.object_b.scale, &set.object_b.pose);
            let ray = world_ray(&set.object_a, ray_shape);

            match ray_triangle_intersection(&ray, &triangle.a, &triangle.b, &triangle.c, tolerances)
            {
                RayTriangleTest::Hit(hit) => {
                    let hit = RayIntersection::new(hit.lambda, hit.normal, FeatureId::Face(0));
                    merge_ray_hit(set, &ray, &hit, query_type, tolerances);
                    Ok(())
                }
                RayTriangleTest::Miss => merge_separation(set, query_type, tolerances),
                RayTriangleTest::Degenerate => {
                    let g1 = convex(&set.object_a)?;
                    let g2 = convex(&set.object_b)?;
                    let mut simplex = JohnsonSimplex::new(tolerances.epsilon);

                    match gjk::closest_points(
                        &g1,
                        &g2,
                        QueryType::ClosestPoints,
                        tolerances,
                        &mut simplex,
                    ) {
                        GjkResult::Intersection => {
                            let hit = ray_convex_intersection(&ray, &g2, tolerances, &mut simplex)
                                .unwrap_or_else(|| {
                                    log::debug!(
                                        "Ray-triangle: GJK found an intersection but the ray cast missed, using the ray origin."
                                    );
                                    RayIntersection::new(0.0, -ray.dir, FeatureId::Unknown)
                                });
                            merge_ray_hit(set, &ray, &hit, query_type, tolerances);
                        }
                        GjkResult::ClosestPoints {
                            point_a,
                            point_b,
                            normal,
                            distance,
                        } => {
                            // Only kept by closest-point queries.
                            let contact =
                                Contact::new(na::center(&point_a, &point_b), normal, -distance, false);
                            set.merge(contact, query_type, tolerances);
                        }
                        GjkResult::Separated(_) => {}
                    }

                    Ok(())
                }
            }
        })
    }
}
