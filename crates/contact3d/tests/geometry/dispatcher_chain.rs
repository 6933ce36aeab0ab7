use contact3d::math::{Isometry, Point, Real, Vector};
use contact3d::na::Unit;
use contact3d::query::{
    CollisionDispatcher, Contact, ContactSet, DefaultCollisionDispatcher, QueryError,
    QueryTolerances, QueryType, Ray,
};
use contact3d::shape::{Ball, GeometricObject, RayShape, Shape, ShapeType};

/// Reports a contact at the origin of the first ray for every ray-ray query.
struct RayRayDispatcher;

impl CollisionDispatcher for RayRayDispatcher {
    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
    ) -> Result<(), QueryError> {
        let (type_a, type_b) = (set.object_a.shape_type(), set.object_b.shape_type());

        if (type_a, type_b) != (ShapeType::Ray, ShapeType::Ray) {
            return Err(QueryError::UnsupportedShapePair(type_a, type_b));
        }

        let origin = set.object_a.pose * Point::origin();
        let contact = Contact::new(origin, Vector::x_axis(), 0.0, false);
        set.merge(contact, query_type, &QueryTolerances::default());
        Ok(())
    }
}

struct Cloud;

impl Shape for Cloud {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Custom
    }

    fn contains_local_point(&self, _: &Point<Real>, _: Real) -> bool {
        false
    }
}

fn ray_object(ray: &RayShape) -> GeometricObject<'_> {
    GeometricObject::with_pose(ray, Isometry::translation(1.0, 2.0, 3.0))
}

#[test]
fn ray_ray_pairs_are_unsupported() {
    let ray = RayShape::new(Ray::new(Point::origin(), Unit::new_normalize(Vector::y()), 1.0));
    let dispatcher = DefaultCollisionDispatcher::default();

    assert_eq!(
        dispatcher.have_contact(ray_object(&ray), ray_object(&ray)),
        Err(QueryError::UnsupportedShapePair(ShapeType::Ray, ShapeType::Ray))
    );
    assert!(dispatcher.algorithm(ShapeType::Ray, ShapeType::Ray).is_none());
    assert_eq!(
        dispatcher
            .algorithm(ShapeType::Cuboid, ShapeType::Ray)
            .map(|alg| alg.name()),
        Some("ray-cuboid")
    );
}

#[test]
fn chained_dispatcher_handles_unsupported_pairs() {
    let ray = RayShape::new(Ray::new(Point::origin(), Unit::new_normalize(Vector::y()), 1.0));
    let dispatcher = DefaultCollisionDispatcher::default().chain(RayRayDispatcher);

    let mut set = ContactSet::new(ray_object(&ray), ray_object(&ray));
    dispatcher
        .compute_collision(&mut set, QueryType::Boolean)
        .unwrap();
    assert!(set.have_contact());

    let mut set = ContactSet::new(ray_object(&ray), ray_object(&ray));
    dispatcher
        .compute_collision(&mut set, QueryType::Contacts)
        .unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.contacts()[0].position, Point::new(1.0, 2.0, 3.0));

    // Pairs supported by the first dispatcher never reach the second one.
    let ball = Ball::new(1.0);
    let mut set = ContactSet::new(
        GeometricObject::with_pose(&ball, Isometry::identity()),
        GeometricObject::with_pose(&ball, Isometry::translation(3.0, 0.0, 0.0)),
    );
    dispatcher
        .compute_collision(&mut set, QueryType::Boolean)
        .unwrap();
    assert!(!set.have_contact());
}

#[test]
fn other_errors_are_not_forwarded() {
    let cloud = Cloud;
    let ball = Ball::new(1.0);
    let dispatcher = DefaultCollisionDispatcher::default().chain(RayRayDispatcher);
    let mut set = ContactSet::new(
        GeometricObject::with_pose(&ball, Isometry::identity()),
        GeometricObject::with_pose(&cloud, Isometry::identity()),
    );

    assert_eq!(
        dispatcher.compute_collision(&mut set, QueryType::Contacts),
        Err(QueryError::NotConvex(ShapeType::Custom))
    );
}

#[test]
fn intersecting_balls_have_contact() {
    let dispatcher = DefaultCollisionDispatcher::default();
    let ball = Ball::new(1.0);
    let a = GeometricObject::with_pose(&ball, Isometry::identity());
    let b = GeometricObject::new(
        &ball,
        Isometry::translation(2.5, 0.0, 0.0),
        Vector::new(2.0, 1.0, 1.0),
    );

    // The scaled ball reaches x = 0.5.
    assert!(dispatcher.have_contact(a, b).unwrap());

    let far = GeometricObject::with_pose(&ball, Isometry::translation(2.5, 0.0, 0.0));
    assert!(!dispatcher.have_contact(a, far).unwrap());

    let closest = dispatcher.closest_points(a, far).unwrap().unwrap();
    assert!(relative_eq!(closest.penetration_depth, -0.5, epsilon = 1.0e-3));
    assert!(relative_eq!(*closest.normal, -Vector::x(), epsilon = 1.0e-3));
}
