//! A ray usable as a shape by the collision dispatcher.

use crate::math::{Point, Real, Vector};
use crate::query::Ray;
use crate::shape::{Segment, SupportMap};

/// A finite ray wrapped as a shape.
///
/// The ray is expressed in the local-space of the shape: the pose and scale of the
/// [`GeometricObject`](crate::shape::GeometricObject) holding it are applied to its origin and
/// end point. As a support-mapped shape it behaves like the segment joining its origin to its
/// end point, but the collision dispatcher selects ray-casting algorithms for it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct RayShape {
    /// The ray, in local-space.
    pub ray: Ray,
}

impl RayShape {
    /// Wraps the given ray into a shape.
    pub fn new(ray: Ray) -> Self {
        Self { ray }
    }

    /// The segment swept by this ray.
    pub fn segment(&self) -> Segment {
        Segment::new(self.ray.origin, self.ray.end())
    }
}

impl SupportMap for RayShape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.ray.dir.dot(dir) > 0.0 {
            self.ray.end()
        } else {
            self.ray.origin
        }
    }

    #[inline]
    fn local_inner_point(&self) -> Point<Real> {
        self.ray.point_at(0.5)
    }
}
