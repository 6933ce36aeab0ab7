use contact3d::math::{Isometry, Point, Vector};
use contact3d::query::sat::{triangle_triangle_contact, TriangleContact, TriangleTriangleOptions};
use contact3d::query::{DefaultCollisionDispatcher, QueryTolerances};
use contact3d::shape::{GeometricObject, Triangle};

fn random_triangle(rng: &mut oorandom::Rand32, shift: Vector<f32>) -> Triangle {
    let mut pt = || Point::from(Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0) + shift);
    Triangle::new(pt(), pt(), pt())
}

#[test]
fn triangle_triangle_contact_is_antisymmetric() {
    let mut rng = oorandom::Rand32::new(1234);
    let options = TriangleTriangleOptions::default();
    let tolerances = QueryTolerances::default();
    let mut num_contacts = 0;

    for _ in 0..300 {
        let shift = Vector::from_fn(|_, _| rng.rand_float() - 0.5);
        let t1 = random_triangle(&mut rng, Vector::zeros());
        let t2 = random_triangle(&mut rng, shift);

        if t1.area() < 0.05 || t2.area() < 0.05 {
            continue;
        }

        let ab = triangle_triangle_contact(&t1, &t2, &options, &tolerances);
        let ba = triangle_triangle_contact(&t2, &t1, &options, &tolerances);

        match (ab, ba) {
            (TriangleContact::None, TriangleContact::None) => {}
            (TriangleContact::Contact(ab), TriangleContact::Contact(ba)) => {
                num_contacts += 1;
                assert!(ab.depth >= 0.0);
                assert!(relative_eq!(ab.depth, ba.depth, epsilon = 1.0e-4));
                assert!(relative_eq!(*ab.normal, -*ba.normal, epsilon = 1.0e-4));
            }
            (ab, ba) => panic!("asymmetric results {:?} and {:?}", ab, ba),
        }
    }

    assert!(num_contacts > 0);
}

#[test]
fn coplanar_overlapping_triangles_touch() {
    let t1 = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    );
    let t2 = Triangle::new(
        Point::new(0.5, 0.5, 0.0),
        Point::new(3.0, 0.5, 0.0),
        Point::new(0.5, 3.0, 0.0),
    );

    let options = TriangleTriangleOptions::default();
    let tolerances = QueryTolerances::default();
    let inside = |tri: &Triangle, pt: &Point<f32>| {
        tri.barycentric_coordinates(pt)
            .unwrap()
            .iter()
            .all(|c| *c >= -1.0e-4)
    };

    match (
        triangle_triangle_contact(&t1, &t2, &options, &tolerances),
        triangle_triangle_contact(&t2, &t1, &options, &tolerances),
    ) {
        (TriangleContact::Contact(ab), TriangleContact::Contact(ba)) => {
            for contact in [ab, ba] {
                assert!(relative_eq!(contact.depth, 0.0, epsilon = 1.0e-4));
                assert!(contact.point.z.abs() < 1.0e-4);
                // The contact lies in the overlap of both triangles.
                assert!(inside(&t1, &contact.point), "{:?} outside of t1", contact.point);
                assert!(inside(&t2, &contact.point), "{:?} outside of t2", contact.point);
            }

            assert!(relative_eq!(*ab.normal, -*ba.normal, epsilon = 1.0e-4));
        }
        res => panic!("expected contacts, got {:?}", res),
    }
}

#[test]
fn posed_triangles_through_dispatcher() {
    let dispatcher = DefaultCollisionDispatcher::default();
    let flat = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    );
    let spike = Triangle::new(
        Point::new(0.25, 0.25, -0.1),
        Point::new(0.25, -1.0, 2.0),
        Point::new(-1.0, 0.25, 2.0),
    );

    // Moving both triangles by the same pose doesn't change the contact depth.
    let pose = Isometry::new(Vector::new(3.0, -1.0, 2.0), Vector::new(0.3, 0.2, -0.1));
    let a = GeometricObject::with_pose(&flat, pose);
    let b = GeometricObject::with_pose(&spike, pose);

    let contacts = dispatcher.contacts(a, b).unwrap();
    assert_eq!(contacts.len(), 1);
    assert!(relative_eq!(contacts[0].penetration_depth, 0.1, epsilon = 1.0e-4));
    assert!(relative_eq!(
        *contacts[0].normal,
        pose * -Vector::z(),
        epsilon = 1.0e-4
    ));

    // Lifting the spike above the flat triangle separates them.
    let lifted = GeometricObject::with_pose(&spike, Isometry::translation(0.0, 0.0, 0.5));
    let origin = GeometricObject::with_pose(&flat, Isometry::identity());
    assert!(!dispatcher.have_contact(origin, lifted).unwrap());

    let closest = dispatcher.closest_points(origin, lifted).unwrap().unwrap();
    assert!(relative_eq!(closest.penetration_depth, -0.4, epsilon = 1.0e-3));
}
