use contact3d::math::{Isometry, Point, Vector};
use contact3d::na::{self, Quaternion, Translation3, UnitQuaternion};
use contact3d::shape::{Cuboid, GeometricObject};

fn random_rotation(rng: &mut oorandom::Rand32) -> UnitQuaternion<f32> {
    na::Unit::try_new(
        Quaternion::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        ),
        1.0e-3,
    )
    .unwrap_or(UnitQuaternion::identity())
}

#[test]
fn scaled_cuboid_support_points_are_extremal_corners() {
    let mut rng = oorandom::Rand32::new(42);
    let cuboid = Cuboid::new(Vector::new(1.0, 0.5, 2.0));

    for _ in 0..500 {
        let scale = Vector::from_fn(|_, _| rng.rand_float() * 3.0 + 0.1);
        let pose = Isometry::from_parts(
            Translation3::new(rng.rand_float(), rng.rand_float(), rng.rand_float()),
            random_rotation(&mut rng),
        );
        let object = GeometricObject::new(&cuboid, pose, scale);
        let convex = object.as_convex().unwrap();
        let dir = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);

        if dir.norm() < 0.1 {
            continue;
        }

        let support = convex.support_point(&dir);
        assert!(
            object.contains_point(&support, 1.0e-3),
            "support point {:?} outside of {:?}",
            support,
            object
        );

        // The support point maximizes the dot product over every world-space corner.
        let best = (0..8)
            .map(|i| {
                let sign = Vector::new(
                    if i & 1 == 0 { -1.0 } else { 1.0 },
                    if i & 2 == 0 { -1.0 } else { 1.0 },
                    if i & 4 == 0 { -1.0 } else { 1.0 },
                );
                let local = Point::from(
                    cuboid
                        .half_extents
                        .component_mul(&sign)
                        .component_mul(&scale),
                );
                (pose * local).coords.dot(&dir)
            })
            .fold(f32::MIN, f32::max);

        assert!(relative_eq!(
            support.coords.dot(&dir),
            best,
            epsilon = 1.0e-3 * best.abs().max(1.0)
        ));
    }
}
