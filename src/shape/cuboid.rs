//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{FeatureId, SupportMap};

/// Shape of a box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The cuboid with half-extents multiplied component-wise by `|scale|`.
    #[inline]
    pub fn scaled(&self, scale: &Vector<Real>) -> Cuboid {
        Cuboid::new(self.half_extents.component_mul(&scale.abs()))
    }

    /// The outward unit normal of the face identified by `feature`.
    ///
    /// Returns `None` if `feature` is not a face of this cuboid.
    pub fn face_normal(&self, feature: FeatureId) -> Option<Vector<Real>> {
        let id = feature.face()? as usize;
        let mut normal = Vector::zeros();

        match id {
            0..=2 => normal[id] = 1.0,
            3..=5 => normal[id - 3] = -1.0,
            _ => return None,
        }

        Some(normal)
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.half_extents
            .zip_map(dir, |h, d| if d < 0.0 { -h } else { h })
            .into()
    }

    #[inline]
    fn local_inner_point(&self) -> Point<Real> {
        Point::origin()
    }
}
