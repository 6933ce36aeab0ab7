use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A Ball shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match Unit::try_new(*dir, 0.0) {
            Some(dir) => self.local_support_point_toward(&dir),
            None => Point::new(self.radius, 0.0, 0.0),
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }

    #[inline]
    fn local_inner_point(&self) -> Point<Real> {
        Point::origin()
    }
}
