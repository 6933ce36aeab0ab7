use crate::math::{Point, Real};
use crate::shape::{Ball, Cuboid, RayShape, Segment, SupportMap, Triangle};
use downcast_rs::{impl_downcast, DowncastSync};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A segment shape.
    Segment,
    /// A triangle shape.
    Triangle,
    /// A finite ray, see [`RayShape`].
    Ray,
    /// A custom user-defined shape.
    Custom,
}

/// Trait implemented by shapes usable by the narrow-phase.
pub trait Shape: DowncastSync {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Converts this shape into its support mapping, if it has one.
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        None
    }

    /// Tests if the given point, expressed in the local-space of this shape, is inside of it,
    /// up to `tolerance`.
    fn contains_local_point(&self, point: &Point<Real>, tolerance: Real) -> bool;
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a segment, if it is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a triangle, if it is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a ray, if it is one.
    pub fn as_ray(&self) -> Option<&RayShape> {
        self.downcast_ref()
    }
}

impl Shape for Ball {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Ball
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_local_point(&self, point: &Point<Real>, tolerance: Real) -> bool {
        point.coords.norm() <= self.radius + tolerance
    }
}

impl Shape for Cuboid {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_local_point(&self, point: &Point<Real>, tolerance: Real) -> bool {
        point
            .coords
            .iter()
            .zip(self.half_extents.iter())
            .all(|(p, h)| p.abs() <= *h + tolerance)
    }
}

impl Shape for Segment {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Segment
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_local_point(&self, point: &Point<Real>, tolerance: Real) -> bool {
        self.distance_to_local_point(point) <= tolerance
    }
}

impl Shape for Triangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_local_point(&self, point: &Point<Real>, tolerance: Real) -> bool {
        self.distance_to_local_point(point) <= tolerance
    }
}

impl Shape for RayShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Ray
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_local_point(&self, point: &Point<Real>, tolerance: Real) -> bool {
        self.segment().distance_to_local_point(point) <= tolerance
    }
}
