//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

use na::Unit;

/// A segment shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a()` toward `self.b()`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }

    /// The point `a + (b - a) * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// The parameter `t` in `[0, 1]` of the point of this segment closest to `pt`.
    pub fn project_local_point_parameter(&self, pt: &Point<Real>) -> Real {
        let ab = self.scaled_direction();
        let sq_len = ab.norm_squared();

        if sq_len == 0.0 {
            0.0
        } else {
            ((pt - self.a).dot(&ab) / sq_len).clamp(0.0, 1.0)
        }
    }

    /// The distance between `pt` and this segment.
    pub fn distance_to_local_point(&self, pt: &Point<Real>) -> Real {
        let t = self.project_local_point_parameter(pt);
        na::distance(&self.point_at(t), pt)
    }
}

impl SupportMap for Segment {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.a.coords.dot(dir) > self.b.coords.dot(dir) {
            self.a
        } else {
            self.b
        }
    }

    #[inline]
    fn local_inner_point(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }
}

#[cfg(test)]
mod test {
    use crate::shape::Segment;
    use na::Point3;

    #[test]
    fn segment_point_distance() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));

        assert!(relative_eq!(
            seg.distance_to_local_point(&Point3::new(1.0, 3.0, 0.0)),
            3.0
        ));
        assert!(relative_eq!(
            seg.distance_to_local_point(&Point3::new(-4.0, 0.0, 3.0)),
            5.0
        ));
        assert_eq!(
            seg.project_local_point_parameter(&Point3::new(5.0, 1.0, 0.0)),
            1.0
        );
    }
}
