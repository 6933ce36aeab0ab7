use crate::query::algorithms::collision_algorithm::{
    merge_ray_hit, merge_separation, with_ray_first, world_ray,
};
use crate::query::algorithms::CollisionAlgorithm;
use crate::query::ray::ray_cuboid_intersection;
use crate::query::{ContactSet, QueryError, QueryTolerances, QueryType};
use crate::shape::ShapeType;

/// Ray-casting on a cuboid with outcodes and slabs.
///
/// The ray is expressed in the local-space of the cuboid, whose half-extents absorb its
/// scale. The hit normal is the normal of the face the ray enters.
#[derive(Copy, Clone, Debug, Default)]
pub struct RayCuboidAlgorithm;

impl CollisionAlgorithm for RayCuboidAlgorithm {
    fn name(&self) -> &'static str {
        "ray-cuboid"
    }

    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
        tolerances: &QueryTolerances,
    ) -> Result<(), QueryError> {
        with_ray_first(set, self.name(), |set, ray_shape| {
            let shape_b = set.object_b.shape;
            let cuboid = shape_b
                .as_cuboid()
                .ok_or(QueryError::UnexpectedShape {
                    algorithm: self.name(),
                    expected: ShapeType::Cuboid,
                    found: shape_b.shape_type(),
                })?;

            let ray = world_ray(&set.object_a, ray_shape);
            let pose_b = set.object_b.pose;
            let half_extents = cuboid.scaled(&set.object_b.scale).half_extents;

            match ray_cuboid_intersection(&ray.inverse_transform_by(&pose_b), &half_extents) {
                Some(hit) => {
                    merge_ray_hit(set, &ray, &hit.transform_by(&pose_b), query_type, tolerances);
                    Ok(())
                }
                None => merge_separation(set, query_type, tolerances),
            }
        })
    }
}
