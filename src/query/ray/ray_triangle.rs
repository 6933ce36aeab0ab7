use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::query::{QueryTolerances, Ray};

/// A ray hitting the interior or the boundary of a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayTriangleHit {
    /// The parameter of the hit point along the ray, in `[0, 1]`.
    pub lambda: Real,
    /// The barycentric coordinates of the hit point relative to the triangle vertices
    /// `a, b, c`.
    pub barycentric: [Real; 3],
    /// The unit normal of the triangle, oriented toward the side the ray comes from.
    pub normal: Unit<Vector<Real>>,
}

/// The outcome of the exact ray-triangle test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RayTriangleTest {
    /// The ray hits the triangle.
    Hit(RayTriangleHit),
    /// The ray does not hit the triangle.
    Miss,
    /// The triangle is degenerate, or the ray is parallel to its plane: the exact test cannot
    /// conclude and a GJK-based test should be used instead.
    Degenerate,
}

/// Computes the intersection between a ray and the triangle `a, b, c`, using the
/// Möller-Trumbore formulation.
///
/// The barycentric coordinates and ray parameter of the intersection between the ray and the
/// triangle plane are obtained with Cramer's rule. The hit is accepted if the parameter lies
/// in `[0, 1]` and the barycentric coordinates are non-negative, both up to
/// `tolerances.epsilon`.
pub fn ray_triangle_intersection(
    ray: &Ray,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    tolerances: &QueryTolerances,
) -> RayTriangleTest {
    let eps = tolerances.epsilon;
    let ab = b - a;
    let ac = c - a;
    let n = ab.cross(&ac);
    let sq_n = n.norm_squared();
    let max_sq_edge = ab.norm_squared().max(ac.norm_squared()).max((c - b).norm_squared());

    // `|n|` is twice the area of the triangle: compare it to the squared edge lengths.
    if sq_n <= tolerances.epsilon_sq() * max_sq_edge * max_sq_edge {
        return RayTriangleTest::Degenerate;
    }

    let r = ray.scaled_dir();
    let h = r.cross(&ac);
    let det = ab.dot(&h);

    // `det = -n · r`, so this compares the sine of the angle between the ray and the plane.
    if det.abs() <= eps * sq_n.sqrt() * ray.length {
        return RayTriangleTest::Degenerate;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(&h) * inv_det;

    if u < -eps || u > 1.0 + eps {
        return RayTriangleTest::Miss;
    }

    let q = s.cross(&ab);
    let v = r.dot(&q) * inv_det;

    if v < -eps || u + v > 1.0 + eps {
        return RayTriangleTest::Miss;
    }

    let lambda = ac.dot(&q) * inv_det;

    if lambda < -eps || lambda > 1.0 + eps {
        return RayTriangleTest::Miss;
    }

    let normal = Unit::new_unchecked(n / sq_n.sqrt());
    let normal = if normal.dot(&r) > 0.0 { -normal } else { normal };

    RayTriangleTest::Hit(RayTriangleHit {
        lambda: lambda.clamp(0.0, 1.0),
        barycentric: [1.0 - u - v, u, v],
        normal,
    })
}
