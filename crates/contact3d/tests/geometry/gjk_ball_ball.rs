use contact3d::math::{Isometry, Vector};
use contact3d::query::gjk::{self, GjkResult, JohnsonSimplex};
use contact3d::query::{DefaultCollisionDispatcher, QueryTolerances, QueryType};
use contact3d::shape::{Ball, GeometricObject};

#[test]
fn gjk_distance_between_balls() {
    let mut rng = oorandom::Rand32::new(7);
    let tolerances = QueryTolerances::default();
    let mut simplex = JohnsonSimplex::new(tolerances.epsilon);

    for _ in 0..200 {
        let ball1 = Ball::new(rng.rand_float() + 0.1);
        let ball2 = Ball::new(rng.rand_float() + 0.1);
        let c1 = Vector::from_fn(|_, _| rng.rand_float() * 10.0 - 5.0);
        let c2 = Vector::from_fn(|_, _| rng.rand_float() * 10.0 - 5.0);
        let expected = (c2 - c1).norm() - ball1.radius - ball2.radius;

        let a = GeometricObject::with_pose(&ball1, Isometry::translation(c1.x, c1.y, c1.z));
        let b = GeometricObject::with_pose(&ball2, Isometry::translation(c2.x, c2.y, c2.z));
        let (ga, gb) = (a.as_convex().unwrap(), b.as_convex().unwrap());

        let result = gjk::closest_points(
            &ga,
            &gb,
            QueryType::ClosestPoints,
            &tolerances,
            &mut simplex,
        );

        if expected > 0.1 {
            match result {
                GjkResult::ClosestPoints {
                    point_a,
                    point_b,
                    normal,
                    distance,
                } => {
                    assert!(relative_eq!(distance, expected, epsilon = 1.0e-2));
                    assert!(relative_eq!((point_a - point_b).norm(), distance, epsilon = 1.0e-2));
                    // The normal points from the second ball toward the first.
                    assert!(normal.dot(&(c1 - c2).normalize()) > 0.99);
                }
                res => panic!("expected closest points, got {:?}", res),
            }
            assert!(!gjk::intersection_test(&ga, &gb, &tolerances, &mut simplex));
        } else if expected < -0.1 {
            assert_eq!(result, GjkResult::Intersection);
            assert!(gjk::intersection_test(&ga, &gb, &tolerances, &mut simplex));
        }
    }
}

#[test]
fn deeply_overlapping_balls_intersect() {
    let mut rng = oorandom::Rand32::new(11);
    let tolerances = QueryTolerances::default();
    let mut simplex = JohnsonSimplex::new(tolerances.epsilon);

    for i in 0..200 {
        let ball1 = Ball::new(rng.rand_float() + 0.1);
        let ball2 = Ball::new(rng.rand_float() + 0.1);
        let dir = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
        // Centers closer than half the sum of the radii, the first sample being concentric.
        let dist = if i == 0 {
            0.0
        } else {
            rng.rand_float() * (ball1.radius + ball2.radius) * 0.5
        };
        let c1 = Vector::from_fn(|_, _| rng.rand_float() * 10.0 - 5.0);
        let c2 = c1 + dir.try_normalize(1.0e-3).unwrap_or(Vector::x()) * dist;

        let a = GeometricObject::with_pose(&ball1, Isometry::translation(c1.x, c1.y, c1.z));
        let b = GeometricObject::with_pose(&ball2, Isometry::translation(c2.x, c2.y, c2.z));
        let (ga, gb) = (a.as_convex().unwrap(), b.as_convex().unwrap());

        let result = gjk::closest_points(
            &ga,
            &gb,
            QueryType::ClosestPoints,
            &tolerances,
            &mut simplex,
        );
        assert_eq!(result, GjkResult::Intersection, "balls at {:?} and {:?}", c1, c2);
        assert!(gjk::intersection_test(&ga, &gb, &tolerances, &mut simplex));
    }
}

#[test]
fn unit_balls_half_a_unit_apart_are_in_contact() {
    let dispatcher = DefaultCollisionDispatcher::default();
    let ball = Ball::new(1.0);
    let a = GeometricObject::with_pose(&ball, Isometry::identity());
    let b = GeometricObject::with_pose(&ball, Isometry::translation(0.5, 0.0, 0.0));

    assert!(dispatcher.have_contact(a, b).unwrap());

    let contacts = dispatcher.contacts(a, b).unwrap();
    assert_eq!(contacts.len(), 1);
    assert!(contacts[0].penetration_depth >= 0.0);
    // Pointing from the second ball toward the first.
    assert!(contacts[0].normal.x < 0.0);

    let closest = dispatcher.closest_points(a, b).unwrap().unwrap();
    assert!(closest.penetration_depth >= 0.0);
}
