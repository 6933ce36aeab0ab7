//! Closest points between segments and lines.

pub use self::closest_points_segment_segment::{
    closest_points_line_line_parameters, closest_points_segment_segment,
    closest_points_segment_segment_parameters,
};

mod closest_points_segment_segment;
