//! Shapes placed in the world by a pose and a non-uniform scale.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Shape, ShapeType, SupportMap};
use na::Unit;

/// A shape placed in world-space.
///
/// The shape is first scaled component-wise by `scale` in its local-space, then transformed
/// by `pose`. A geometric object is an immutable view: it borrows its shape for the duration
/// of a query.
#[derive(Copy, Clone)]
pub struct GeometricObject<'a> {
    /// The shape of this object.
    pub shape: &'a dyn Shape,
    /// The position and orientation of this object.
    pub pose: Isometry<Real>,
    /// The non-uniform scale applied to the shape, in its local-space.
    pub scale: Vector<Real>,
}

impl<'a> GeometricObject<'a> {
    /// Creates a new geometric object.
    pub fn new(shape: &'a dyn Shape, pose: Isometry<Real>, scale: Vector<Real>) -> Self {
        Self { shape, pose, scale }
    }

    /// Creates a new geometric object with a unit scale.
    pub fn with_pose(shape: &'a dyn Shape, pose: Isometry<Real>) -> Self {
        Self::new(shape, pose, Vector::repeat(1.0))
    }

    /// The type of the shape of this object.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Views this object as a world-space convex support-mapped object, if its shape has a
    /// support mapping.
    pub fn as_convex(&self) -> Option<ConvexObject<'a>> {
        Some(ConvexObject {
            support_map: self.shape.as_support_map()?,
            pose: self.pose,
            scale: self.scale,
        })
    }

    /// Converts a world-space point to the scaled local-space of this object.
    ///
    /// Returns `None` if a scale component is zero.
    pub fn to_local_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        let mut result = self.pose.inverse_transform_point(pt);

        for i in 0..3 {
            if self.scale[i] == 0.0 {
                return None;
            }
            result[i] /= self.scale[i];
        }

        Some(result)
    }

    /// Tests if the world-space point `pt` is inside of this object, up to `tolerance`.
    ///
    /// The tolerance is expressed in the unscaled local-space of the shape.
    pub fn contains_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        self.to_local_point(pt)
            .map(|local| self.shape.contains_local_point(&local, tolerance))
            .unwrap_or(false)
    }
}

impl core::fmt::Debug for GeometricObject<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GeometricObject")
            .field("shape_type", &self.shape_type())
            .field("pose", &self.pose)
            .field("scale", &self.scale)
            .finish()
    }
}

/// A world-space view of a convex support-mapped shape with a pose and a non-uniform scale.
///
/// For a diagonal scale `S`, rotation `R` and translation `t`, the world-space support point
/// along `d` is `R · S · support(S · R⁻¹ · d) + t`, which is the exact support point of the
/// scaled shape.
#[derive(Copy, Clone)]
pub struct ConvexObject<'a> {
    /// The support mapping of the shape.
    pub support_map: &'a dyn SupportMap,
    /// The position and orientation of the shape.
    pub pose: Isometry<Real>,
    /// The non-uniform scale applied to the shape in its local-space.
    pub scale: Vector<Real>,
}

impl<'a> ConvexObject<'a> {
    /// Creates a convex object from a support map.
    pub fn new(support_map: &'a dyn SupportMap, pose: Isometry<Real>, scale: Vector<Real>) -> Self {
        Self {
            support_map,
            pose,
            scale,
        }
    }

    /// Is the scale of this object the identity?
    #[inline]
    pub fn is_unscaled(&self) -> bool {
        self.scale == Vector::repeat(1.0)
    }

    /// The world-space support point of this object along `dir`.
    #[inline]
    pub fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.is_unscaled() {
            return self.support_map.support_point(&self.pose, dir);
        }

        let local_dir = self
            .pose
            .inverse_transform_vector(dir)
            .component_mul(&self.scale);
        let local_pt = self.support_map.local_support_point(&local_dir);
        self.pose * Point::from(local_pt.coords.component_mul(&self.scale))
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    #[inline]
    pub fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        if self.is_unscaled() {
            self.support_map.support_point_toward(&self.pose, dir)
        } else {
            self.support_point(dir.as_ref())
        }
    }

    /// A world-space point inside of this object.
    #[inline]
    pub fn inner_point(&self) -> Point<Real> {
        let local_pt = self.support_map.local_inner_point();
        self.pose * Point::from(local_pt.coords.component_mul(&self.scale))
    }
}
