use crate::query::algorithms::collision_algorithm::{
    convex, merge_ray_hit, merge_separation, with_ray_first, world_ray,
};
use crate::query::algorithms::CollisionAlgorithm;
use crate::query::gjk::JohnsonSimplex;
use crate::query::ray::ray_convex_intersection;
use crate::query::{ContactSet, QueryError, QueryTolerances, QueryType};

/// Ray-casting on any support-mapped shape with GJK-based conservative advancement.
#[derive(Copy, Clone, Debug, Default)]
pub struct RayConvexAlgorithm;

impl CollisionAlgorithm for RayConvexAlgorithm {
    fn name(&self) -> &'static str {
        "ray-convex"
    }

    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
        tolerances: &QueryTolerances,
    ) -> Result<(), QueryError> {
        with_ray_first(set, self.name(), |set, ray_shape| {
            let shape = convex(&set.object_b)?;
            let ray = world_ray(&set.object_a, ray_shape);
            let mut simplex = JohnsonSimplex::new(tolerances.epsilon);

            match ray_convex_intersection(&ray, &shape, tolerances, &mut simplex) {
                Some(hit) => {
                    merge_ray_hit(set, &ray, &hit, query_type, tolerances);
                    Ok(())
                }
                None => merge_separation(set, query_type, tolerances),
            }
        })
    }
}
