use contact3d::math::{Isometry, Point, Vector};
use contact3d::na::{self, Quaternion, Translation3, UnitQuaternion};
use contact3d::query::{
    CollisionDispatcher, ContactSet, DefaultCollisionDispatcher, QueryType, Ray,
};
use contact3d::shape::{Cuboid, FeatureId, GeometricObject, RayShape, Shape, Triangle};

fn run_test<S: Shape>(name: &str, shape: S) {
    let mut rng = oorandom::Rand32::new(42);
    let dispatcher = DefaultCollisionDispatcher::default();

    for _ in 0..500 {
        let dir = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);

        if dir.norm() < 0.1 {
            continue;
        }

        let origin = Point::from(dir.normalize() * 5.0);
        let ray = RayShape::new(Ray::from_points(origin, Point::origin()).unwrap());

        let rotation = na::Unit::try_new(
            Quaternion::new(
                rng.rand_float(),
                rng.rand_float(),
                rng.rand_float(),
                rng.rand_float(),
            ),
            1.0e-5,
        )
        .unwrap_or(UnitQuaternion::identity());
        let pose = Isometry::from_parts(Translation3::identity(), rotation);

        let object = GeometricObject::with_pose(&shape, pose);
        let ray_object = GeometricObject::with_pose(&ray, Isometry::identity());

        let contacts = dispatcher.contacts(ray_object, object).unwrap();
        assert_eq!(contacts.len(), 1, "ray {:?} missed {}", ray, name);
        let hit = contacts[0];
        assert!(hit.is_ray_hit);
        assert!(relative_eq!(
            hit.penetration_depth,
            na::distance(&origin, &hit.position),
            epsilon = 1.0e-4
        ));

        let nudged_in = hit.position - *hit.normal * 1.0e-3;
        let nudged_out = hit.position + *hit.normal * 1.0e-3;
        assert!(
            object.contains_point(&nudged_in, 1.0e-4),
            "{} rotated with {:?} does not contain {:?}",
            name,
            rotation,
            nudged_in
        );
        assert!(
            !object.contains_point(&nudged_out, 1.0e-4),
            "{} rotated with {:?} contains {:?}",
            name,
            rotation,
            nudged_out
        );

        // Swapping the objects flips the contact.
        let swapped = dispatcher.contacts(object, ray_object).unwrap();
        assert_eq!(swapped.len(), 1);
        assert!(relative_eq!(swapped[0].position, hit.position, epsilon = 1.0e-5));
        assert!(relative_eq!(*swapped[0].normal, -*hit.normal, epsilon = 1.0e-5));
        assert_eq!(swapped[0].feature_a, hit.feature_b);
    }
}

#[test]
fn ray_contacts_lie_on_the_surface() {
    run_test("unit cube", Cuboid::new(Vector::new(1.0, 1.0, 1.0)));
    run_test("flat box", Cuboid::new(Vector::new(1.0, 1.0, 0.5)));
    run_test("slim box", Cuboid::new(Vector::new(0.5, 1.0, 0.5)));
}

#[test]
fn ray_triangle_through_dispatcher() {
    let dispatcher = DefaultCollisionDispatcher::default();
    let tri = Triangle::new(
        Point::new(-1.0, -1.0, 0.0),
        Point::new(2.0, -1.0, 0.0),
        Point::new(-1.0, 2.0, 0.0),
    );
    let tri_object = GeometricObject::with_pose(&tri, Isometry::translation(0.0, 0.0, 1.0));

    let down = RayShape::new(
        Ray::from_points(Point::new(0.0, 0.0, 5.0), Point::new(0.0, 0.0, -5.0)).unwrap(),
    );
    let down_object = GeometricObject::with_pose(&down, Isometry::identity());

    let hit = dispatcher
        .closest_points(down_object, tri_object)
        .unwrap()
        .unwrap();
    assert!(relative_eq!(hit.position, Point::new(0.0, 0.0, 1.0), epsilon = 1.0e-5));
    assert!(relative_eq!(hit.penetration_depth, 4.0, epsilon = 1.0e-5));
    assert!(relative_eq!(*hit.normal, Vector::z(), epsilon = 1.0e-5));
    assert_eq!(hit.feature_b, FeatureId::Face(0));

    // A ray passing next to the triangle misses it, and reports a negative depth when asked
    // for closest points.
    let aside = RayShape::new(
        Ray::from_points(Point::new(5.0, 5.0, 5.0), Point::new(5.0, 5.0, -5.0)).unwrap(),
    );
    let aside_object = GeometricObject::with_pose(&aside, Isometry::identity());
    assert!(!dispatcher.have_contact(aside_object, tri_object).unwrap());
    assert!(dispatcher.contacts(aside_object, tri_object).unwrap().is_empty());

    let closest = dispatcher
        .closest_points(aside_object, tri_object)
        .unwrap()
        .unwrap();
    assert!(closest.penetration_depth < 0.0);
    assert!(!closest.is_ray_hit);
}

#[test]
fn ray_in_triangle_plane_through_dispatcher() {
    let dispatcher = DefaultCollisionDispatcher::default();
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(3.0, 0.0, 0.0),
        Point::new(0.0, 3.0, 0.0),
    );
    let tri_object = GeometricObject::with_pose(&tri, Isometry::identity());

    // The ray lies in the triangle plane and enters it through the edge `x = 0`.
    let across = RayShape::new(
        Ray::from_points(Point::new(-2.0, 1.0, 0.0), Point::new(5.0, 1.0, 0.0)).unwrap(),
    );
    let across_object = GeometricObject::with_pose(&across, Isometry::identity());

    assert!(dispatcher.have_contact(across_object, tri_object).unwrap());
    let contacts = dispatcher.contacts(across_object, tri_object).unwrap();
    assert_eq!(contacts.len(), 1);
    assert!(contacts[0].is_ray_hit);
    assert!(relative_eq!(contacts[0].position, Point::new(0.0, 1.0, 0.0), epsilon = 1.0e-3));
    assert!(relative_eq!(contacts[0].penetration_depth, 2.0, epsilon = 1.0e-3));

    // Parallel to the plane, but passing beyond the hypotenuse.
    let beyond = RayShape::new(
        Ray::from_points(Point::new(-2.0, 5.0, 0.0), Point::new(5.0, 5.0, 0.0)).unwrap(),
    );
    let beyond_object = GeometricObject::with_pose(&beyond, Isometry::identity());

    assert!(!dispatcher.have_contact(beyond_object, tri_object).unwrap());
    assert!(dispatcher.contacts(beyond_object, tri_object).unwrap().is_empty());
}

#[test]
fn repeated_queries_do_not_duplicate_contacts() {
    let dispatcher = DefaultCollisionDispatcher::default();
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let ray = RayShape::new(Ray::from_points(Point::new(5.0, 0.2, 0.1), Point::origin()).unwrap());
    let mut set = ContactSet::new(
        GeometricObject::with_pose(&ray, Isometry::identity()),
        GeometricObject::with_pose(&cuboid, Isometry::identity()),
    );

    dispatcher
        .compute_collision(&mut set, QueryType::Contacts)
        .unwrap();
    let first = set.contacts().to_vec();
    dispatcher
        .compute_collision(&mut set, QueryType::Contacts)
        .unwrap();

    assert_eq!(set.contacts(), &first[..]);
    assert!(set.have_contact());
}
