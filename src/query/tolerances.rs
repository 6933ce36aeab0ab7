use crate::math::Real;

/// The maximum number of iterations of the GJK algorithm.
pub const MAX_GJK_ITERATIONS: usize = 32;
/// The maximum number of iterations of the conservative-advancement ray-cast.
pub const MAX_RAY_CAST_ITERATIONS: usize = 32;

/// Numerical tolerances shared by every collision algorithm.
///
/// The same tolerance values must be used by the simplex solver, the separating-axis tests,
/// the ray-casters, and the contact merging so that they agree on what counts as degenerate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueryTolerances {
    /// The general-purpose relative tolerance.
    pub epsilon: Real,
    /// Two contacts closer than this distance are considered identical when merged into a
    /// contact set.
    pub contact_position_tolerance: Real,
}

impl Default for QueryTolerances {
    fn default() -> Self {
        Self {
            epsilon: 1.0e-4,
            contact_position_tolerance: 1.0e-2,
        }
    }
}

impl QueryTolerances {
    /// The squared general-purpose tolerance.
    #[inline]
    pub fn epsilon_sq(&self) -> Real {
        self.epsilon * self.epsilon
    }

    /// The general-purpose tolerance scaled by a problem magnitude.
    #[inline]
    pub fn scaled_epsilon(&self, magnitude: Real) -> Real {
        self.epsilon * magnitude.abs()
    }
}

#[cfg(test)]
mod test {
    use super::QueryTolerances;

    #[test]
    fn scaled_epsilon_follows_magnitude() {
        let tols = QueryTolerances::default();
        assert!(relative_eq!(tols.scaled_epsilon(0.001), tols.epsilon * 0.001));
        assert!(relative_eq!(tols.scaled_epsilon(-100.0), tols.epsilon * 100.0));
        assert!(relative_eq!(tols.epsilon_sq(), 1.0e-8));
    }
}
