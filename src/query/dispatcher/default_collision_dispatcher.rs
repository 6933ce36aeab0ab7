use crate::query::algorithms::{
    CollisionAlgorithm, ConvexConvexAlgorithm, RayConvexAlgorithm, RayCuboidAlgorithm,
    RayTriangleAlgorithm, TriangleTriangleAlgorithm,
};
use crate::query::sat::TriangleTriangleOptions;
use crate::query::{
    CollisionDispatcher, Contact, ContactSet, QueryError, QueryTolerances, QueryType,
};
use crate::shape::{GeometricObject, ShapeType};

/// The collision dispatcher handling all the shapes of this crate.
///
/// Algorithms are selected by the pair of shape types, regardless of their order:
///
/// | Pair                      | Algorithm                     |
/// |---------------------------|-------------------------------|
/// | ray, cuboid               | [`RayCuboidAlgorithm`]        |
/// | ray, triangle             | [`RayTriangleAlgorithm`]      |
/// | ray, ray                  | unsupported                   |
/// | ray, any other shape      | [`RayConvexAlgorithm`]        |
/// | triangle, triangle        | [`TriangleTriangleAlgorithm`] |
/// | any other pair            | [`ConvexConvexAlgorithm`]     |
///
/// The same [`QueryTolerances`] are given to every algorithm.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use contact3d::query::{DefaultCollisionDispatcher, Ray};
/// use contact3d::shape::{Cuboid, GeometricObject, RayShape};
/// use contact3d::na::{Isometry3, Point3, Vector3};
///
/// let cuboid = Cuboid::new(Vector3::repeat(1.0));
/// let ray = RayShape::new(Ray::from_points(Point3::new(5.0, 0.0, 0.0), Point3::origin()).unwrap());
/// let dispatcher = DefaultCollisionDispatcher::default();
///
/// let contacts = dispatcher
///     .contacts(
///         GeometricObject::with_pose(&ray, Isometry3::identity()),
///         GeometricObject::with_pose(&cuboid, Isometry3::identity()),
///     )
///     .unwrap();
///
/// assert_eq!(contacts.len(), 1);
/// assert_eq!(contacts[0].position, Point3::new(1.0, 0.0, 0.0));
/// assert_eq!(*contacts[0].normal, Vector3::x());
/// assert_eq!(contacts[0].penetration_depth, 4.0);
/// # }
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultCollisionDispatcher {
    /// The tolerances used by every algorithm.
    pub tolerances: QueryTolerances,
    ray_cuboid: RayCuboidAlgorithm,
    ray_convex: RayConvexAlgorithm,
    ray_triangle: RayTriangleAlgorithm,
    triangle_triangle: TriangleTriangleAlgorithm,
    convex_convex: ConvexConvexAlgorithm,
}

impl DefaultCollisionDispatcher {
    /// Creates a dispatcher with the given tolerances.
    pub fn new(tolerances: QueryTolerances) -> Self {
        Self {
            tolerances,
            ..Self::default()
        }
    }

    /// Sets the options of the triangle-triangle algorithm.
    pub fn with_triangle_options(mut self, options: TriangleTriangleOptions) -> Self {
        self.triangle_triangle = TriangleTriangleAlgorithm::new(options);
        self
    }

    /// The algorithm handling the given pair of shape types, if any.
    pub fn algorithm(&self, a: ShapeType, b: ShapeType) -> Option<&dyn CollisionAlgorithm> {
        use ShapeType::*;

        match (a, b) {
            (Ray, Ray) => None,
            (Ray, Cuboid) | (Cuboid, Ray) => Some(&self.ray_cuboid),
            (Ray, Triangle) | (Triangle, Ray) => Some(&self.ray_triangle),
            (Ray, _) | (_, Ray) => Some(&self.ray_convex),
            (Triangle, Triangle) => Some(&self.triangle_triangle),
            _ => Some(&self.convex_convex),
        }
    }

    /// Tests whether two objects touch.
    pub fn have_contact(
        &self,
        a: GeometricObject,
        b: GeometricObject,
    ) -> Result<bool, QueryError> {
        let mut set = ContactSet::new(a, b);
        self.compute_collision(&mut set, QueryType::Boolean)?;
        Ok(set.have_contact())
    }

    /// Computes the penetrating contacts between two objects.
    pub fn contacts(
        &self,
        a: GeometricObject,
        b: GeometricObject,
    ) -> Result<Vec<Contact>, QueryError> {
        let mut set = ContactSet::new(a, b);
        self.compute_collision(&mut set, QueryType::Contacts)?;
        Ok(set.contacts().to_vec())
    }

    /// Computes the closest-point contact between two objects.
    ///
    /// Separated objects yield a contact with a negative depth whose absolute value is their
    /// distance.
    pub fn closest_points(
        &self,
        a: GeometricObject,
        b: GeometricObject,
    ) -> Result<Option<Contact>, QueryError> {
        let mut set = ContactSet::new(a, b);
        self.compute_collision(&mut set, QueryType::ClosestPoints)?;
        Ok(set.contacts().first().copied())
    }
}

impl CollisionDispatcher for DefaultCollisionDispatcher {
    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
    ) -> Result<(), QueryError> {
        let type_a = set.object_a.shape_type();
        let type_b = set.object_b.shape_type();

        self.algorithm(type_a, type_b)
            .ok_or(QueryError::UnsupportedShapePair(type_a, type_b))?
            .compute_collision(set, query_type, &self.tolerances)
    }
}
