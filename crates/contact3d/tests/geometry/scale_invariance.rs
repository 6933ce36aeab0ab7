use contact3d::math::{Isometry, Point, Vector};
use contact3d::query::gjk::{self, GjkResult, JohnsonSimplex};
use contact3d::query::sat::{triangle_triangle_contact, TriangleContact, TriangleTriangleOptions};
use contact3d::query::{QueryTolerances, QueryType};
use contact3d::shape::{Cuboid, GeometricObject, Triangle};

fn cuboid_distance(scale: f32) -> f32 {
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let pose = Isometry::new(
        Vector::new(3.5, 0.5, 0.2) * scale,
        Vector::new(0.3, 0.4, 0.5),
    );
    let a = GeometricObject::new(&cuboid, Isometry::identity(), Vector::repeat(scale));
    let b = GeometricObject::new(&cuboid, pose, Vector::repeat(scale));
    let tolerances = QueryTolerances::default();
    let mut simplex = JohnsonSimplex::new(tolerances.epsilon);

    match gjk::closest_points(
        &a.as_convex().unwrap(),
        &b.as_convex().unwrap(),
        QueryType::ClosestPoints,
        &tolerances,
        &mut simplex,
    ) {
        GjkResult::ClosestPoints { distance, .. } => distance,
        res => panic!("expected closest points at scale {}, got {:?}", scale, res),
    }
}

#[test]
fn gjk_distance_scales_with_the_shapes() {
    let reference = cuboid_distance(1.0);

    for scale in [1.0e-1, 1.0e-2, 1.0e-3, 1.0e-4] {
        let distance = cuboid_distance(scale) / scale;
        assert!(
            relative_eq!(distance, reference, max_relative = 1.0e-3),
            "distance {} at scale {}, expected {}",
            distance,
            scale,
            reference
        );
    }
}

#[test]
fn triangle_contact_scales_with_the_triangles() {
    let options = TriangleTriangleOptions::default();
    let tolerances = QueryTolerances::default();

    for scale in [1.0, 1.0e-2, 1.0e-3, 1.0e-4] {
        let t1 = Triangle::new(
            Point::new(0.0, 0.0, 0.0) * scale,
            Point::new(2.0, 0.0, 0.0) * scale,
            Point::new(0.0, 2.0, 0.0) * scale,
        );
        let t2 = Triangle::new(
            Point::new(0.25, 0.25, -0.1) * scale,
            Point::new(0.25, -1.0, 2.0) * scale,
            Point::new(-1.0, 0.25, 2.0) * scale,
        );

        match triangle_triangle_contact(&t1, &t2, &options, &tolerances) {
            TriangleContact::Contact(contact) => {
                assert!(relative_eq!(contact.depth / scale, 0.1, epsilon = 1.0e-4));
                assert!(relative_eq!(*contact.normal, -Vector::z(), epsilon = 1.0e-4));
                assert!(
                    relative_eq!(
                        contact.point / scale,
                        Point::new(0.25, 0.25, -0.05),
                        epsilon = 1.0e-4
                    ),
                    "contact point {:?} at scale {}",
                    contact.point,
                    scale
                );
            }
            res => panic!("expected a contact at scale {}, got {:?}", scale, res),
        }
    }
}
