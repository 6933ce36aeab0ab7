use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::FeatureId;

/// A single contact between two geometric objects.
///
/// All quantities are expressed in world-space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contact {
    /// The contact point.
    pub position: Point<Real>,
    /// The contact normal, pointing from the second object toward the first.
    pub normal: Unit<Vector<Real>>,
    /// The penetration depth along `normal`.
    ///
    /// Negative depths encode a separation distance and are only produced by closest-point
    /// queries. For ray hits, this is the distance from the ray origin to the hit point.
    pub penetration_depth: Real,
    /// Is this contact the hit point of a ray?
    pub is_ray_hit: bool,
    /// The feature of the first object involved in the contact.
    pub feature_a: FeatureId,
    /// The feature of the second object involved in the contact.
    pub feature_b: FeatureId,
}

impl Contact {
    /// Creates a new contact with unknown features.
    #[inline]
    pub fn new(
        position: Point<Real>,
        normal: Unit<Vector<Real>>,
        penetration_depth: Real,
        is_ray_hit: bool,
    ) -> Self {
        Self {
            position,
            normal,
            penetration_depth,
            is_ray_hit,
            feature_a: FeatureId::Unknown,
            feature_b: FeatureId::Unknown,
        }
    }

    /// Sets the features of both objects involved in this contact.
    #[inline]
    pub fn with_features(mut self, feature_a: FeatureId, feature_b: FeatureId) -> Self {
        self.feature_a = feature_a;
        self.feature_b = feature_b;
        self
    }

    /// Sets the feature of the first object involved in this contact.
    #[inline]
    pub fn set_feature_a(&mut self, feature: FeatureId) {
        self.feature_a = feature;
    }

    /// Sets the feature of the second object involved in this contact.
    #[inline]
    pub fn set_feature_b(&mut self, feature: FeatureId) {
        self.feature_b = feature;
    }

    /// Is this a penetrating (or touching) contact?
    #[inline]
    pub fn is_penetrating(&self) -> bool {
        self.penetration_depth >= 0.0
    }

    /// Swaps the roles of both objects: the normal is negated and the features exchanged.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            position: self.position,
            normal: -self.normal,
            penetration_depth: self.penetration_depth,
            is_ray_hit: self.is_ray_hit,
            feature_a: self.feature_b,
            feature_b: self.feature_a,
        }
    }

    /// Flips this contact in-place.
    #[inline]
    pub fn flip(&mut self) {
        *self = self.flipped();
    }
}
