use na::Unit;

use crate::math::Vector;
use crate::query::algorithms::collision_algorithm::convex;
use crate::query::algorithms::CollisionAlgorithm;
use crate::query::gjk::{self, GjkResult, JohnsonSimplex};
use crate::query::{Contact, ContactSet, QueryError, QueryTolerances, QueryType};

/// Collision between two support-mapped shapes with the GJK algorithm.
///
/// No penetration depth is computed: intersecting shapes yield a single contact with a zero
/// depth, located at the witness point found by GJK, with a normal joining the inner points
/// of both shapes. Separated shapes yield their closest points with a negative depth, which
/// only closest-point queries keep.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConvexConvexAlgorithm;

impl CollisionAlgorithm for ConvexConvexAlgorithm {
    fn name(&self) -> &'static str {
        "convex-convex"
    }

    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
        tolerances: &QueryTolerances,
    ) -> Result<(), QueryError> {
        let g1 = convex(&set.object_a)?;
        let g2 = convex(&set.object_b)?;
        let mut simplex = JohnsonSimplex::new(tolerances.epsilon);

        match gjk::closest_points(&g1, &g2, query_type, tolerances, &mut simplex) {
            GjkResult::Intersection if query_type == QueryType::Boolean => set.set_have_contact(),
            GjkResult::Intersection => {
                let (point_a, point_b) = simplex.closest_points_on_shapes();
                let normal = Unit::try_new(g1.inner_point() - g2.inner_point(), 0.0)
                    .unwrap_or(Vector::x_axis());
                let contact = Contact::new(na::center(&point_a, &point_b), normal, 0.0, false);
                set.merge(contact, query_type, tolerances);
            }
            GjkResult::ClosestPoints {
                point_a,
                point_b,
                normal,
                distance,
            } => {
                let contact =
                    Contact::new(na::center(&point_a, &point_b), normal, -distance, false);
                set.merge(contact, query_type, tolerances);
            }
            GjkResult::Separated(_) => {}
        }

        Ok(())
    }
}
