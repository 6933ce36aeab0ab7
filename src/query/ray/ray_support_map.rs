use na::Unit;

use crate::math::{Real, Vector};
use crate::query::gjk::{CsoPoint, JohnsonSimplex};
use crate::query::{QueryTolerances, Ray, RayIntersection, MAX_RAY_CAST_ITERATIONS};
use crate::shape::{ConvexObject, FeatureId};

/// Casts a world-space ray on a convex shape using GJK-based conservative advancement.
///
/// The current hit candidate `x` starts at the ray origin. Each iteration computes the point
/// `v` of `x - shape` closest to the origin with the GJK simplex. Whenever the support point
/// `p` of the shape along `v` proves that `x` is separated from the shape (`v · (x - p) > 0`),
/// `x` is advanced along the ray up to the separating plane, and the simplex is cleared. The
/// ray misses if it cannot reach the plane within its length.
///
/// The returned normal is the last separating direction, i.e., the outward normal of the
/// shape at the hit point. If the ray starts inside of the shape, the hit is at `λ = 0` with a
/// normal opposite to the ray direction.
///
/// See "Ray Casting against General Convex Objects with Application to Continuous Collision
/// Detection", G. van den Bergen.
pub fn ray_convex_intersection(
    ray: &Ray,
    shape: &ConvexObject,
    tolerances: &QueryTolerances,
    simplex: &mut JohnsonSimplex,
) -> Option<RayIntersection> {
    let eps_sq = tolerances.epsilon_sq();
    let r = ray.scaled_dir();
    let mut lambda: Real = 0.0;
    let mut x = ray.origin;
    let mut normal = Vector::zeros();
    let mut v = x - shape.inner_point();
    let mut niter = 0;

    simplex.clear();

    loop {
        if niter == MAX_RAY_CAST_ITERATIONS {
            log::debug!(
                "Ray cast: maximum number of iterations ({}) reached, returning the current estimate.",
                MAX_RAY_CAST_ITERATIONS
            );
            break;
        }

        niter += 1;

        if v.norm_squared() <= eps_sq * simplex.max_sq_len() {
            break;
        }

        let p = shape.support_point(&v);
        let mut w = x - p;
        let vw = v.dot(&w);

        if vw > 0.0 {
            let vr = v.dot(&r);

            if vr >= 0.0 {
                return None;
            }

            lambda -= vw / vr;

            if lambda > 1.0 {
                return None;
            }

            x = ray.point_at(lambda);
            normal = v;
            simplex.clear();
            w = x - p;
        }

        if !simplex.add_point(CsoPoint::new_with_point(w.into(), x, p)) || !simplex.update() {
            // The simplex can't get any closer to the origin.
            break;
        }

        if simplex.is_full() {
            break;
        }

        v = simplex.closest_point().coords;
    }

    let normal = Unit::try_new(normal, 0.0).unwrap_or(-ray.dir);
    Some(RayIntersection::new(lambda, normal, FeatureId::Unknown))
}
