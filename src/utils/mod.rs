//! Various unsorted geometrical and logical operators.

pub use self::hashable_partial_eq::HashablePartialEq;

mod hashable_partial_eq;
