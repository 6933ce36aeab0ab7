use crate::math::{Point, Real};
use crate::shape::Segment;

/// The parameters `(s, t)` in `[0, 1]` of the closest points `seg1.point_at(s)` and
/// `seg2.point_at(t)` between two segments.
///
/// Degenerate segments are treated as points. For parallel segments, any pair of closest
/// points may be returned.
#[inline]
pub fn closest_points_segment_segment_parameters(seg1: &Segment, seg2: &Segment) -> (Real, Real) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    // Relative to the longest segment.
    let eps = crate::math::DEFAULT_EPSILON * a.max(e);
    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > crate::math::DEFAULT_EPSILON * ae && !ulps_eq!(ae, bb) {
                s = ((b * f - c * e) / denom).clamp(0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
        }
    }

    (s, t)
}

/// The closest points between two segments.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (s, t) = closest_points_segment_segment_parameters(seg1, seg2);
    (seg1.point_at(s), seg2.point_at(t))
}

/// The unclamped parameters `(s, t)` of the closest points between the lines supporting two
/// segments.
///
/// Returns `None` if the lines are parallel up to the relative tolerance `eps`, or if one of
/// the segments is degenerate.
#[inline]
pub fn closest_points_line_line_parameters(
    seg1: &Segment,
    seg2: &Segment,
    eps: Real,
) -> Option<(Real, Real)> {
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let b = d1.dot(&d2);
    let c = d1.dot(&r);
    let f = d2.dot(&r);
    let denom = a * e - b * b;

    // `denom = |d1 × d2|²`: compare the squared sine of the angle between the lines.
    if a == 0.0 || e == 0.0 || denom <= eps * eps * a * e {
        return None;
    }

    let s = (b * f - c * e) / denom;
    let t = (a * f - b * c) / denom;
    Some((s, t))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn crossing_segments() {
        let seg1 = Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point::new(0.5, -1.0, 1.0), Point::new(0.5, 1.0, 1.0));

        let (p1, p2) = closest_points_segment_segment(&seg1, &seg2);
        assert!(relative_eq!(p1, Point::new(0.5, 0.0, 0.0)));
        assert!(relative_eq!(p2, Point::new(0.5, 0.0, 1.0)));

        let (s, t) = closest_points_line_line_parameters(&seg1, &seg2, 1.0e-4).unwrap();
        assert!(relative_eq!(s, 0.75));
        assert!(relative_eq!(t, 0.5));
    }

    #[test]
    fn disjoint_lines_are_not_clamped() {
        let seg1 = Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point::new(3.0, -1.0, 1.0), Point::new(3.0, 1.0, 1.0));

        let (s, t) = closest_points_line_line_parameters(&seg1, &seg2, 1.0e-4).unwrap();
        assert!(relative_eq!(s, 3.0));
        assert!(relative_eq!(t, 0.5));

        let (s, t) = closest_points_segment_segment_parameters(&seg1, &seg2);
        assert_eq!(s, 1.0);
        assert!(relative_eq!(t, 0.5));
    }

    #[test]
    fn parallel_lines() {
        let seg1 = Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point::new(0.0, 1.0, 0.0), Point::new(2.0, 1.0, 0.0));
        assert!(closest_points_line_line_parameters(&seg1, &seg2, 1.0e-4).is_none());
    }
}
