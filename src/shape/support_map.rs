//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the point of the shape maximizing its dot
/// product with that direction. When several points reach the maximum, any of them may be
/// returned. Evaluating a support function never has side-effects.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local-space.
    ///
    /// `dir` does not need to be normalized but must not contain NaN components. A zero `dir`
    /// yields an arbitrary point of the shape.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// A point strictly inside of this shape (or on the shape itself if it has no interior),
    /// expressed in its local-space.
    ///
    /// This is used to seed iterative searches like GJK.
    fn local_inner_point(&self) -> Point<Real>;

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
