//! The finite ray used by ray-casting collision algorithms.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::FeatureId;
use na::Unit;

/// A finite ray (a directed segment) for ray-casting queries.
///
/// A ray starts at `origin` and extends along the unit direction `dir` for `length` world
/// units. Points along the ray are parametrized by `λ ∈ [0, 1]`, `λ = 0` being the origin and
/// `λ = 1` the end of the ray.
///
/// Rays are plain values: every transformation returns a new ray.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use contact3d::query::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::x_axis(), 10.0);
/// assert_eq!(ray.end(), Point3::new(10.0, 0.0, 0.0));
/// assert_eq!(ray.point_at(0.5), Point3::new(5.0, 0.0, 0.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Unit direction of the ray.
    pub dir: Unit<Vector<Real>>,
    /// Length of the ray, in world units.
    pub length: Real,
}

impl Ray {
    /// Creates a new ray from its origin, unit direction, and length.
    pub fn new(origin: Point<Real>, dir: Unit<Vector<Real>>, length: Real) -> Ray {
        Ray {
            origin,
            dir,
            length,
        }
    }

    /// Creates the ray going from `start` to `end`.
    ///
    /// Returns `None` if both points coincide.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use contact3d::query::Ray;
    /// use nalgebra::Point3;
    ///
    /// let ray = Ray::from_points(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 4.0, 0.0)).unwrap();
    /// assert_eq!(ray.length, 4.0);
    /// assert!(Ray::from_points(Point3::origin(), Point3::origin()).is_none());
    /// # }
    /// ```
    pub fn from_points(start: Point<Real>, end: Point<Real>) -> Option<Ray> {
        let (dir, length) = Unit::try_new_and_get(end - start, 0.0)?;
        Some(Ray::new(start, dir, length))
    }

    /// The direction of this ray multiplied by its length.
    #[inline]
    pub fn scaled_dir(&self) -> Vector<Real> {
        *self.dir * self.length
    }

    /// The end point of this ray.
    #[inline]
    pub fn end(&self) -> Point<Real> {
        self.origin + self.scaled_dir()
    }

    /// Computes the point at parameter `lambda` along this ray.
    ///
    /// `lambda = 0` is the origin and `lambda = 1` is the end of the ray.
    #[inline]
    pub fn point_at(&self, lambda: Real) -> Point<Real> {
        self.origin + self.scaled_dir() * lambda
    }

    /// Transforms this ray by the given isometry, e.g., from a local-space to world-space.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir, self.length)
    }

    /// Transforms this ray by the inverse of the given isometry, e.g., from world-space to the
    /// local-space of a shape.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            Unit::new_unchecked(m.inverse_transform_vector(&self.dir)),
            self.length,
        )
    }

    /// Scales the origin and the end point of this ray component-wise by `scale`.
    ///
    /// If the scaled ray collapses to a single point, its direction is kept unchanged and its
    /// length becomes zero.
    pub fn scaled(&self, scale: &Vector<Real>) -> Self {
        let origin = Point::from(self.origin.coords.component_mul(scale));
        let end = Point::from(self.end().coords.component_mul(scale));
        Self::from_points(origin, end).unwrap_or(Self::new(origin, self.dir, 0.0))
    }
}

/// Structure containing the result of a successful ray cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The parameter of the hit point along the ray, in `[0, 1]`.
    pub lambda: Real,
    /// The unit normal at the hit point, pointing from the hit shape toward the ray origin.
    ///
    /// If the ray starts inside of the shape, this is the opposite of the ray direction.
    pub normal: Unit<Vector<Real>>,
    /// Feature of the shape hit by the ray.
    pub feature: FeatureId,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(lambda: Real, normal: Unit<Vector<Real>>, feature: FeatureId) -> RayIntersection {
        RayIntersection {
            lambda,
            normal,
            feature,
        }
    }

    /// The distance between the ray origin and the hit point.
    #[inline]
    pub fn distance(&self, ray: &Ray) -> Real {
        self.lambda * ray.length
    }

    /// Transforms `self.normal` by `transform`.
    #[inline]
    pub fn transform_by(&self, transform: &Isometry<Real>) -> Self {
        RayIntersection {
            lambda: self.lambda,
            normal: transform * self.normal,
            feature: self.feature,
        }
    }
}
