use na::Unit;

use crate::math::{Real, Vector};
use crate::query::{Ray, RayIntersection};
use crate::shape::FeatureId;

bitflags::bitflags! {
    /// Location of a point relative to the six face planes of an axis-aligned box.
    ///
    /// A bit is set if the point is strictly outside of the corresponding face plane. A point
    /// with an empty outcode is inside of the box.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Outcode: u8 {
        /// Outside of the `+x` face.
        const POS_X = 1 << 0;
        /// Outside of the `+y` face.
        const POS_Y = 1 << 1;
        /// Outside of the `+z` face.
        const POS_Z = 1 << 2;
        /// Outside of the `-x` face.
        const NEG_X = 1 << 3;
        /// Outside of the `-y` face.
        const NEG_Y = 1 << 4;
        /// Outside of the `-z` face.
        const NEG_Z = 1 << 5;
    }
}

impl Outcode {
    /// Computes the outcode of `pt` relative to the box centered at the origin with the given
    /// half-extents.
    pub fn new(pt: &Vector<Real>, half_extents: &Vector<Real>) -> Self {
        let mut result = Outcode::empty();

        for i in 0..3 {
            if pt[i] > half_extents[i] {
                result |= Outcode::from_bits_retain(1 << i);
            } else if pt[i] < -half_extents[i] {
                result |= Outcode::from_bits_retain(1 << (i + 3));
            }
        }

        result
    }

    /// The faces of the box this outcode refers to, identified as in [`FeatureId::Face`] for
    /// cuboids.
    fn faces(self) -> impl Iterator<Item = usize> {
        (0..6).filter(move |i| self.bits() & (1 << i) != 0)
    }
}

/// Computes the intersection between a ray and the box centered at the origin with the given
/// half-extents, both expressed in the local-space of the box.
///
/// The outcodes of the ray origin and end point are computed first: if both lie strictly
/// outside of the same face plane, the ray misses. If the origin is inside of the box, the
/// ray hits at `λ = 0` with a normal opposite to the ray direction. Otherwise the parameter
/// at which the ray enters the box is the largest crossing parameter of the planes the origin
/// is outside of, and the parameter at which it leaves is the smallest crossing parameter of
/// the planes the end point is outside of. The ray hits iff. it enters before it leaves.
///
/// The returned normal is the outward normal of the entered face, and the feature is the
/// corresponding cuboid face.
pub fn ray_cuboid_intersection(
    ray: &Ray,
    half_extents: &Vector<Real>,
) -> Option<RayIntersection> {
    let start = ray.origin.coords;
    let end = ray.end().coords;
    let start_code = Outcode::new(&start, half_extents);
    let end_code = Outcode::new(&end, half_extents);

    if start_code.intersects(end_code) {
        return None;
    }

    if start_code.is_empty() {
        return Some(RayIntersection::new(0.0, -ray.dir, FeatureId::Unknown));
    }

    let crossing = |face: usize| {
        let axis = face % 3;
        let plane = if face < 3 {
            half_extents[axis]
        } else {
            -half_extents[axis]
        };

        // The shared-bit test above guarantees the denominator isn't zero.
        (plane - start[axis]) / (end[axis] - start[axis])
    };

    let mut lambda_enter = 0.0;
    let mut enter_face = 0;

    for face in start_code.faces() {
        let lambda = crossing(face);

        if lambda > lambda_enter {
            lambda_enter = lambda;
            enter_face = face;
        }
    }

    let lambda_exit = end_code.faces().map(crossing).fold(1.0, Real::min);

    if lambda_enter > lambda_exit {
        return None;
    }

    let mut normal = Vector::zeros();
    normal[enter_face % 3] = if enter_face < 3 { 1.0 } else { -1.0 };

    Some(RayIntersection::new(
        lambda_enter,
        Unit::new_unchecked(normal),
        FeatureId::Face(enter_face as u32),
    ))
}
