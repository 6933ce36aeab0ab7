use core::hash::{Hash, Hasher};

use crate::math::{Point, Real};

/// A structure that implements `Eq` and `Hash` for points, by comparing their exact
/// coordinates.
///
/// Used to weld vertices with identical coordinates. `-0.0` and `0.0` are considered equal.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HashablePartialEq<T> {
    value: T,
}

impl<T> HashablePartialEq<T> {
    /// Creates a new `HashablePartialEq`. Please make sure that you really
    /// want to transform `value`'s `PartialEq` into an `Eq`.
    pub fn new(value: T) -> HashablePartialEq<T> {
        HashablePartialEq { value }
    }

    /// Gets the wrapped value.
    pub fn unwrap(self) -> T {
        self.value
    }
}

impl<T: PartialEq> Eq for HashablePartialEq<T> {}

impl Hash for HashablePartialEq<Point<Real>> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coord in self.value.iter() {
            // Adding zero maps `-0.0` to `0.0`, which compare equal.
            (coord + 0.0).to_bits().hash(state);
        }
    }
}

#[cfg(test)]
mod test {
    use super::HashablePartialEq;
    use crate::math::Point;
    use hashbrown::HashSet;

    #[test]
    fn identical_points_are_welded() {
        let mut set = HashSet::new();
        assert!(set.insert(HashablePartialEq::new(Point::new(1.0, 0.0, 2.0))));
        assert!(!set.insert(HashablePartialEq::new(Point::new(1.0, -0.0, 2.0))));
        assert!(set.insert(HashablePartialEq::new(Point::new(1.0, 0.0, 2.000001))));
        assert_eq!(set.len(), 2);
    }
}
