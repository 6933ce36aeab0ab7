//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK works on the **Minkowski difference** (also called Configuration Space Obstacle or CSO)
//! `A - B` of two convex shapes. It iteratively builds a simplex of CSO points whose point
//! closest to the origin converges toward the point of the CSO closest to the origin:
//!
//! - if the origin is **inside** the CSO, the shapes are intersecting;
//! - otherwise the distance from the origin to the CSO is the distance between the shapes,
//!   and the simplex barycentric coordinates give the closest points on each shape.
//!
//! GJK does not compute penetration depths.

use na::Unit;
use num::Bounded;

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{CsoPoint, JohnsonSimplex};
use crate::query::{QueryTolerances, QueryType, MAX_GJK_ITERATIONS};
use crate::shape::ConvexObject;

/// Results of the GJK algorithm.
///
/// All points and vectors are expressed in world-space.
#[derive(Clone, Debug, PartialEq)]
pub enum GjkResult {
    /// The shapes are intersecting (or touching, up to the tolerance).
    Intersection,
    /// The shapes are separated and their closest points were computed.
    ClosestPoints {
        /// The point of the first shape closest to the second shape.
        point_a: Point<Real>,
        /// The point of the second shape closest to the first shape.
        point_b: Point<Real>,
        /// The unit direction from `point_b` toward `point_a`.
        normal: Unit<Vector<Real>>,
        /// The distance between both shapes.
        distance: Real,
    },
    /// The shapes are separated. Only a separating direction, pointing from the second shape
    /// toward the first, was computed.
    ///
    /// This is only returned by [`QueryType::Boolean`] queries.
    Separated(Unit<Vector<Real>>),
}

impl GjkResult {
    /// Are the shapes intersecting?
    #[inline]
    pub fn is_intersection(&self) -> bool {
        matches!(self, GjkResult::Intersection)
    }
}

/// Computes the closest points between two convex shapes, or detects their intersection.
///
/// # Parameters
///
/// * `g1`, `g2` - The two convex shapes, in world-space.
/// * `query_type` - With [`QueryType::Boolean`] the algorithm exits as soon as a separating
///   plane is found, returning [`GjkResult::Separated`]. Otherwise it runs until convergence
///   and returns [`GjkResult::ClosestPoints`] for separated shapes.
/// * `tolerances` - The relative convergence tolerance is `tolerances.epsilon`.
/// * `simplex` - A simplex reused across calls to avoid re-initialization costs. It is cleared
///   before being used.
///
/// # Notes
///
/// The search starts with the direction joining the inner points of both shapes. It is
/// bounded by [`MAX_GJK_ITERATIONS`]; reaching that cap is not an error and the best closest
/// points found so far are returned.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use contact3d::query::gjk::{self, GjkResult, JohnsonSimplex};
/// use contact3d::query::{QueryTolerances, QueryType};
/// use contact3d::shape::{Ball, GeometricObject};
/// use contact3d::na::Isometry3;
///
/// let ball = Ball::new(1.0);
/// let a = GeometricObject::with_pose(&ball, Isometry3::translation(0.0, 0.0, 0.0));
/// let b = GeometricObject::with_pose(&ball, Isometry3::translation(5.0, 0.0, 0.0));
/// let tolerances = QueryTolerances::default();
/// let mut simplex = JohnsonSimplex::new(tolerances.epsilon);
///
/// let result = gjk::closest_points(
///     &a.as_convex().unwrap(),
///     &b.as_convex().unwrap(),
///     QueryType::ClosestPoints,
///     &tolerances,
///     &mut simplex,
/// );
///
/// match result {
///     GjkResult::ClosestPoints { distance, .. } => assert!((distance - 3.0).abs() < 1.0e-3),
///     _ => unreachable!(),
/// }
/// # }
/// ```
pub fn closest_points(
    g1: &ConvexObject,
    g2: &ConvexObject,
    query_type: QueryType,
    tolerances: &QueryTolerances,
    simplex: &mut JohnsonSimplex,
) -> GjkResult {
    let eps_sq = tolerances.epsilon_sq();

    simplex.clear();

    let mut v = g1.inner_point() - g2.inner_point();
    if v.norm_squared() == 0.0 {
        v = Vector::x();
    }

    // Upper bound of the squared distance, not known until the first support point.
    let mut dist_sq = <Real as Bounded>::max_value();
    let mut niter = 0;

    loop {
        if niter == MAX_GJK_ITERATIONS {
            log::debug!(
                "GJK: maximum number of iterations ({}) reached, returning the best estimate.",
                MAX_GJK_ITERATIONS
            );
            break;
        }

        niter += 1;

        // Support point of the CSO along `-v`.
        let w = CsoPoint::from_shapes(g1, g2, &-v);
        let vw = v.dot(&w.point.coords);

        if query_type == QueryType::Boolean && vw > 0.0 {
            // `v` defines a separating plane.
            return GjkResult::Separated(Unit::new_normalize(v));
        }

        if !simplex.is_empty()
            && (simplex.contains_point(&w.point) || dist_sq - vw <= eps_sq * dist_sq)
        {
            // The lower bound `v.w / |v|` and the upper bound `|v|` are close enough.
            break;
        }

        if !simplex.add_point(w) || !simplex.update() {
            break;
        }

        if simplex.is_full() {
            return GjkResult::Intersection;
        }

        let new_v = simplex.closest_point().coords;
        let new_dist_sq = new_v.norm_squared();

        if new_dist_sq <= eps_sq * simplex.max_sq_len() {
            return GjkResult::Intersection;
        }

        let stalled = new_dist_sq >= dist_sq;
        v = new_v;
        dist_sq = new_dist_sq;

        if stalled {
            break;
        }
    }

    result(simplex, query_type)
}

/// Tests whether two convex shapes intersect.
pub fn intersection_test(
    g1: &ConvexObject,
    g2: &ConvexObject,
    tolerances: &QueryTolerances,
    simplex: &mut JohnsonSimplex,
) -> bool {
    closest_points(g1, g2, QueryType::Boolean, tolerances, simplex).is_intersection()
}

fn result(simplex: &JohnsonSimplex, query_type: QueryType) -> GjkResult {
    let v = simplex.closest_point().coords;

    match Unit::try_new_and_get(v, 0.0) {
        Some((normal, _)) if query_type == QueryType::Boolean => GjkResult::Separated(normal),
        Some((normal, distance)) => {
            let (point_a, point_b) = simplex.closest_points_on_shapes();
            GjkResult::ClosestPoints {
                point_a,
                point_b,
                normal,
                distance,
            }
        }
        None => GjkResult::Intersection,
    }
}

#[cfg(test)]
mod test {
    use super::{closest_points, GjkResult};
    use crate::math::{Isometry, Point, Vector};
    use crate::query::gjk::JohnsonSimplex;
    use crate::query::{QueryTolerances, QueryType};
    use crate::shape::{Ball, Cuboid, GeometricObject, Triangle};

    #[test]
    fn ball_ball_distance() {
        let b1 = Ball::new(1.0);
        let b2 = Ball::new(0.5);
        let a = GeometricObject::with_pose(&b1, Isometry::translation(1.0, 2.0, 3.0));
        let b = GeometricObject::with_pose(&b2, Isometry::translation(4.0, 6.0, 3.0));
        let tols = QueryTolerances::default();
        let mut simplex = JohnsonSimplex::new(tols.epsilon);

        match closest_points(
            &a.as_convex().unwrap(),
            &b.as_convex().unwrap(),
            QueryType::ClosestPoints,
            &tols,
            &mut simplex,
        ) {
            GjkResult::ClosestPoints {
                point_a,
                point_b,
                normal,
                distance,
            } => {
                assert!(relative_eq!(distance, 3.5, epsilon = 1.0e-3));
                assert!(relative_eq!(
                    *normal,
                    Vector::new(-0.6, -0.8, 0.0),
                    epsilon = 1.0e-3
                ));
                assert!(relative_eq!(point_a, Point::new(1.6, 2.8, 3.0), epsilon = 1.0e-2));
                assert!(relative_eq!(point_b, Point::new(3.7, 5.6, 3.0), epsilon = 1.0e-2));
            }
            res => panic!("unexpected GJK result: {:?}", res),
        }
    }

    #[test]
    fn overlapping_cuboids_intersect() {
        let c = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
        let a = GeometricObject::with_pose(&c, Isometry::identity());
        let b = GeometricObject::with_pose(
            &c,
            Isometry::new(Vector::new(1.5, 0.5, 0.0), Vector::new(0.0, 0.0, 0.4)),
        );
        let tols = QueryTolerances::default();
        let mut simplex = JohnsonSimplex::new(tols.epsilon);

        for query_type in [QueryType::Boolean, QueryType::ClosestPoints] {
            assert_eq!(
                closest_points(
                    &a.as_convex().unwrap(),
                    &b.as_convex().unwrap(),
                    query_type,
                    &tols,
                    &mut simplex,
                ),
                GjkResult::Intersection
            );
        }
    }

    #[test]
    fn deeply_overlapping_balls_intersect() {
        let ball = Ball::new(1.0);
        let a = GeometricObject::with_pose(&ball, Isometry::identity());
        let tols = QueryTolerances::default();
        let mut simplex = JohnsonSimplex::new(tols.epsilon);

        // The inner points are closer to each other than any CSO support point is to the
        // origin, and the concentric case has no initial direction at all.
        for offset in [0.5, 0.0] {
            let b = GeometricObject::with_pose(&ball, Isometry::translation(offset, 0.0, 0.0));

            for query_type in [QueryType::Boolean, QueryType::ClosestPoints] {
                assert_eq!(
                    closest_points(
                        &a.as_convex().unwrap(),
                        &b.as_convex().unwrap(),
                        query_type,
                        &tols,
                        &mut simplex,
                    ),
                    GjkResult::Intersection
                );
            }
        }
    }

    #[test]
    fn separated_boolean_query_exits_early() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        );
        let ball = Ball::new(0.25);
        let a = GeometricObject::with_pose(&tri, Isometry::identity());
        let b = GeometricObject::with_pose(&ball, Isometry::translation(0.2, 0.2, 1.0));
        let tols = QueryTolerances::default();
        let mut simplex = JohnsonSimplex::new(tols.epsilon);

        match closest_points(
            &a.as_convex().unwrap(),
            &b.as_convex().unwrap(),
            QueryType::Boolean,
            &tols,
            &mut simplex,
        ) {
            GjkResult::Separated(dir) => assert!(dir.z < 0.0),
            res => panic!("unexpected GJK result: {:?}", res),
        }
    }
}
