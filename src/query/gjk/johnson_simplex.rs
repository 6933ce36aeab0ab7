//! Johnson's distance sub-algorithm on a simplex of up to four CSO points.

use crate::math::{Point, Real, Vector};
use crate::query::gjk::CsoPoint;

const FULL: u8 = 0b1111;

/// A simplex of dimension up to 3 that uses Johnson's distance sub-algorithm to compute the
/// point closest to the origin.
///
/// The sub-determinants of every subset of vertices are cached and updated incrementally: the
/// vertex slots are identified by bits, and `det[subset][i]` is the cofactor of the vertex
/// `i` within the vertex set `subset`. A vertex set is kept only if all its cofactors are
/// positive and adding any other vertex would make its cofactor non-positive.
///
/// See "Collision Detection in Interactive 3D Environments", G. van den Bergen, section 4.3.
#[derive(Clone, Debug)]
pub struct JohnsonSimplex {
    vertices: [CsoPoint; 4],
    // Dot products between the vertices.
    dp: [[Real; 4]; 4],
    // Cofactors, indexed by vertex subset, then by vertex.
    det: [[Real; 4]; 16],
    // Vertices of the current simplex.
    bits: u8,
    // Slot of the last added vertex.
    last: usize,
    last_bit: u8,
    // `bits | last_bit`.
    all_bits: u8,
    closest: Vector<Real>,
    valid: bool,
    epsilon: Real,
}

impl JohnsonSimplex {
    /// Creates a new empty simplex.
    ///
    /// `epsilon` is the relative tolerance used to detect duplicate vertices and degenerate
    /// sub-simplices.
    pub fn new(epsilon: Real) -> Self {
        Self {
            vertices: [CsoPoint::origin(); 4],
            dp: [[0.0; 4]; 4],
            det: [[0.0; 4]; 16],
            bits: 0,
            last: 0,
            last_bit: 0,
            all_bits: 0,
            closest: Vector::zeros(),
            valid: false,
            epsilon,
        }
    }

    /// Removes every vertex of this simplex.
    pub fn clear(&mut self) {
        self.bits = 0;
        self.last = 0;
        self.last_bit = 0;
        self.all_bits = 0;
        self.closest = Vector::zeros();
        self.valid = false;
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Does this simplex have no vertex?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Does this simplex have four vertices?
    ///
    /// A full simplex encloses the origin.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits == FULL
    }

    /// Did the last call to `self.update()` succeed?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The point of this simplex closest to the origin, as computed by the last successful
    /// call to `self.update()`.
    #[inline]
    pub fn closest_point(&self) -> Point<Real> {
        Point::from(self.closest)
    }

    /// The maximum squared length of the vertices of this simplex.
    pub fn max_sq_len(&self) -> Real {
        (0..4)
            .filter(|i| self.bits & (1 << i) != 0)
            .map(|i| self.dp[i][i])
            .fold(0.0, Real::max)
    }

    /// The vertices of this simplex.
    pub fn vertices(&self) -> impl Iterator<Item = &CsoPoint> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(move |(i, _)| self.bits & (1 << i) != 0)
            .map(|(_, v)| v)
    }

    /// Checks if `pt` is, up to the tolerance, a vertex of this simplex or was the last vertex
    /// added to it.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let tol = self.epsilon * self.epsilon * self.max_sq_len();

        (0..4).any(|i| {
            self.all_bits & (1 << i) != 0
                && (self.vertices[i].point - pt).norm_squared() <= tol
        })
    }

    /// Adds a vertex to this simplex.
    ///
    /// Returns `false` (and leaves the simplex unchanged) if the simplex is full or if `pt`
    /// duplicates one of its vertices. The closest point is not updated until
    /// `self.update()` is called.
    pub fn add_point(&mut self, pt: CsoPoint) -> bool {
        if self.is_full() || self.contains_point(&pt.point) {
            return false;
        }

        self.last = 0;
        self.last_bit = 1;

        while self.bits & self.last_bit != 0 {
            self.last += 1;
            self.last_bit <<= 1;
        }

        self.vertices[self.last] = pt;
        self.all_bits = self.bits | self.last_bit;
        self.update_determinants();
        true
    }

    /// Recomputes the point of this simplex closest to the origin, discarding the vertices
    /// that do not contribute to it.
    ///
    /// Returns `false` if every candidate sub-simplex is numerically degenerate. In that case
    /// the last added vertex is discarded and the previous closest point is kept.
    pub fn update(&mut self) -> bool {
        let mut s = self.bits;

        while s != 0 {
            if s & self.bits == s {
                let candidate = s | self.last_bit;

                if self.is_valid_subset(candidate) {
                    if let Some(closest) = self.barycentric_point(candidate) {
                        self.bits = candidate;
                        self.closest = closest;
                        self.valid = true;
                        return true;
                    }
                }
            }

            s -= 1;
        }

        if self.is_valid_subset(self.last_bit) {
            self.bits = self.last_bit;
            self.closest = self.vertices[self.last].point.coords;
            self.valid = true;
            return true;
        }

        log::debug!("Johnson sub-algorithm: no valid sub-simplex, keeping the previous result.");
        self.valid = false;
        false
    }

    /// The points on each original shape corresponding to the closest point of this simplex.
    pub fn closest_points_on_shapes(&self) -> (Point<Real>, Point<Real>) {
        let mut sum = 0.0;
        let mut p1 = Vector::zeros();
        let mut p2 = Vector::zeros();

        for i in 0..4 {
            if self.bits & (1 << i) != 0 {
                let w = self.det[self.bits as usize][i];
                sum += w;
                p1 += self.vertices[i].orig1.coords * w;
                p2 += self.vertices[i].orig2.coords * w;
            }
        }

        if sum > 0.0 {
            (Point::from(p1 / sum), Point::from(p2 / sum))
        } else {
            (Point::origin(), Point::origin())
        }
    }

    fn update_determinants(&mut self) {
        let last = self.last;
        let last_bit = self.last_bit as usize;
        let y = &self.vertices;
        let dp = &mut self.dp;
        let det = &mut self.det;

        for i in 0..4 {
            if self.bits & (1 << i) != 0 {
                dp[i][last] = y[i].point.coords.dot(&y[last].point.coords);
                dp[last][i] = dp[i][last];
            }
        }

        dp[last][last] = y[last].point.coords.norm_squared();
        det[last_bit][last] = 1.0;

        for j in 0..4 {
            let sj = 1 << j;

            if self.bits as usize & sj == 0 {
                continue;
            }

            let s2 = sj | last_bit;
            det[s2][j] = dp[last][last] - dp[last][j];
            det[s2][last] = dp[j][j] - dp[j][last];

            for k in 0..j {
                let sk = 1 << k;

                if self.bits as usize & sk == 0 {
                    continue;
                }

                let s3 = sk | s2;
                det[s3][k] = det[s2][j] * (dp[j][j] - dp[j][k])
                    + det[s2][last] * (dp[last][j] - dp[last][k]);
                det[s3][j] = det[sk | last_bit][k] * (dp[k][k] - dp[k][j])
                    + det[sk | last_bit][last] * (dp[last][k] - dp[last][j]);
                det[s3][last] = det[sk | sj][k] * (dp[k][k] - dp[k][last])
                    + det[sk | sj][j] * (dp[j][k] - dp[j][last]);
            }
        }

        if self.all_bits == FULL {
            det[15][0] = det[14][1] * (dp[1][1] - dp[1][0])
                + det[14][2] * (dp[2][1] - dp[2][0])
                + det[14][3] * (dp[3][1] - dp[3][0]);
            det[15][1] = det[13][0] * (dp[0][0] - dp[0][1])
                + det[13][2] * (dp[2][0] - dp[2][1])
                + det[13][3] * (dp[3][0] - dp[3][1]);
            det[15][2] = det[11][0] * (dp[0][0] - dp[0][2])
                + det[11][1] * (dp[1][0] - dp[1][2])
                + det[11][3] * (dp[3][0] - dp[3][2]);
            det[15][3] = det[7][0] * (dp[0][0] - dp[0][3])
                + det[7][1] * (dp[1][0] - dp[1][3])
                + det[7][2] * (dp[2][0] - dp[2][3]);
        }
    }

    // The subset `s` is valid iff. the cofactors of its vertices are positive and the
    // cofactors of every other vertex added to it are non-positive.
    fn is_valid_subset(&self, s: u8) -> bool {
        for i in 0..4 {
            let bit = 1 << i;

            if self.all_bits & bit != 0 {
                if s & bit != 0 {
                    if self.det[s as usize][i] <= 0.0 {
                        return false;
                    }
                } else if self.det[(s | bit) as usize][i] > 0.0 {
                    return false;
                }
            }
        }

        true
    }

    fn barycentric_point(&self, s: u8) -> Option<Vector<Real>> {
        let mut sum = 0.0;
        let mut max_sq_len: Real = 0.0;
        let mut v = Vector::zeros();

        for i in 0..4 {
            if s & (1 << i) != 0 {
                let w = self.det[s as usize][i];
                sum += w;
                v += self.vertices[i].point.coords * w;
                max_sq_len = max_sq_len.max(self.dp[i][i]);
            }
        }

        // The cofactor sum of a k-vertex sub-simplex scales like the squared (k-1)-volume.
        let dim = s.count_ones() as i32 - 1;
        let threshold = (self.epsilon * self.epsilon) * max_sq_len.powi(dim);

        if (dim > 0 && sum <= threshold) || !sum.is_finite() {
            None
        } else {
            Some(v / sum)
        }
    }
}
