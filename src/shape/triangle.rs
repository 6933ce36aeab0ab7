//! Definition of the triangle shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Segment, SupportMap};

use na::{self, ComplexField, Unit};

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Returns `None` if the triangle is degenerate relative to the length of its
    /// edges.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let sq_len = ab.norm_squared().max(ac.norm_squared());
        Unit::try_new(ab.cross(&ac), crate::math::DEFAULT_EPSILON * sq_len)
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The three edges scaled directions of this triangle: [B - A, C - B, A - C].
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// Returns a new triangle with vertices scaled component-wise by `scale`, then transformed
    /// by `m`.
    #[inline]
    pub fn scaled_and_transformed(&self, scale: &Vector<Real>, m: &Isometry<Real>) -> Self {
        let s = |p: &Point<Real>| m * Point::from(p.coords.component_mul(scale));
        Triangle::new(s(&self.a), s(&self.b), s(&self.c))
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        // Kahan's formula.
        let mut sides = [
            na::distance(&self.a, &self.b),
            na::distance(&self.b, &self.c),
            na::distance(&self.c, &self.a),
        ];
        sides.sort_by(|x, y| y.total_cmp(x));
        let [a, b, c] = sides;

        let sqr = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));

        // We take the max(0.0) because it can be slightly negative
        // because of numerical errors due to almost-degenerate triangles.
        ComplexField::sqrt(sqr.max(0.0)) * 0.25
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// The barycentric coordinates of the orthogonal projection of `pt` onto the plane of this
    /// triangle.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn barycentric_coordinates(&self, pt: &Point<Real>) -> Option<[Real; 3]> {
        let n = self.scaled_normal();
        let sq_n = n.norm_squared();

        if sq_n == 0.0 {
            return None;
        }

        let u = n.dot(&(self.b - pt).cross(&(self.c - pt))) / sq_n;
        let v = n.dot(&(self.c - pt).cross(&(self.a - pt))) / sq_n;
        Some([u, v, 1.0 - u - v])
    }

    /// The point of this triangle closest to `pt`.
    pub fn project_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        // Voronoi region walk, see Ericson, "Real-Time Collision Detection", 5.1.5.
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = pt - self.a;

        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return self.a;
        }

        let bp = pt - self.b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return self.b;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return self.a + ab * v;
        }

        let cp = pt - self.c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return self.c;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return self.a + ac * w;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return self.b + (self.c - self.b) * w;
        }

        let denom = va + vb + vc;
        if denom == 0.0 {
            // Degenerate triangle: fall back to the closest edge.
            return self
                .edges()
                .iter()
                .map(|e| e.point_at(e.project_local_point_parameter(pt)))
                .min_by(|p1, p2| {
                    na::distance_squared(p1, pt).total_cmp(&na::distance_squared(p2, pt))
                })
                .unwrap_or(self.a);
        }

        let v = vb / denom;
        let w = vc / denom;
        self.a + ab * v + ac * w
    }

    /// The distance between `pt` and this triangle.
    pub fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        na::distance(&self.project_local_point(pt), pt)
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let d1 = self.a.coords.dot(dir);
        let d2 = self.b.coords.dot(dir);
        let d3 = self.c.coords.dot(dir);

        if d1 > d2 {
            if d1 > d3 {
                self.a
            } else {
                self.c
            }
        } else if d2 > d3 {
            self.b
        } else {
            self.c
        }
    }

    #[inline]
    fn local_inner_point(&self) -> Point<Real> {
        self.center()
    }
}
