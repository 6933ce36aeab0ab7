use crate::math::{Point, Real, Vector};
use crate::shape::ConvexObject;
use core::ops::Sub;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CsoPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point<Real>,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point<Real>,
}

impl CsoPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        let point = Point::from(orig1 - orig2);
        Self::new_with_point(point, orig1, orig2)
    }

    /// Initializes a CSO point with all information provided.
    ///
    /// It is assumed, but not checked, that `point == orig1 - orig2`.
    pub fn new_with_point(point: Point<Real>, orig1: Point<Real>, orig2: Point<Real>) -> Self {
        CsoPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// CSO point where all components are set to zero.
    pub fn origin() -> Self {
        CsoPoint::new(Point::origin(), Point::origin())
    }

    /// Computes the support point of the CSO `g1 - g2` toward the direction `dir`.
    ///
    /// This is `support(g1, dir) - support(g2, -dir)`.
    pub fn from_shapes(g1: &ConvexObject, g2: &ConvexObject, dir: &Vector<Real>) -> Self {
        let sp1 = g1.support_point(dir);
        let sp2 = g2.support_point(&-*dir);

        CsoPoint::new(sp1, sp2)
    }
}

impl Sub<CsoPoint> for CsoPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CsoPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
