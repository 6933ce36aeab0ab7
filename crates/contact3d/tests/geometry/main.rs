#[macro_use]
extern crate approx;

mod dcel_round_trip;
mod dispatcher_chain;
mod gjk_ball_ball;
mod ray_dispatch;
mod scale_invariance;
mod support_points;
mod triangle_triangle_sat;
