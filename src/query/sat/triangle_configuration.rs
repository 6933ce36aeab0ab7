use crate::math::{Real, Vector};
use crate::shape::Triangle;

/// The projection of the vertices of a triangle onto an axis, sorted.
///
/// `min`, `mid` and `max` are the indices (in `0..3`, following the order `a, b, c`) of the
/// vertices with the smallest, median, and largest projections.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleConfiguration {
    /// Index of the vertex with the smallest projection.
    pub min: usize,
    /// Index of the vertex with the median projection.
    pub mid: usize,
    /// Index of the vertex with the largest projection.
    pub max: usize,
    /// The smallest projection.
    pub min_proj: Real,
    /// The median projection.
    pub mid_proj: Real,
    /// The largest projection.
    pub max_proj: Real,
}

impl TriangleConfiguration {
    /// Projects the vertices of `triangle` onto `axis` and sorts them.
    pub fn new(triangle: &Triangle, axis: &Vector<Real>) -> Self {
        let proj = [
            triangle.a.coords.dot(axis),
            triangle.b.coords.dot(axis),
            triangle.c.coords.dot(axis),
        ];

        let mut ids = [0, 1, 2];
        ids.sort_by(|i, j| proj[*i].total_cmp(&proj[*j]));
        let [min, mid, max] = ids;

        Self {
            min,
            mid,
            max,
            min_proj: proj[min],
            mid_proj: proj[mid],
            max_proj: proj[max],
        }
    }

    /// The length of the projection interval.
    #[inline]
    pub fn extent(&self) -> Real {
        self.max_proj - self.min_proj
    }
}
