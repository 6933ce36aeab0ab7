use crate::query::algorithms::collision_algorithm::merge_separation;
use crate::query::algorithms::CollisionAlgorithm;
use crate::query::sat::{triangle_triangle_contact, TriangleContact, TriangleTriangleOptions};
use crate::query::{Contact, ContactSet, QueryError, QueryTolerances, QueryType};
use crate::shape::{ShapeType, Triangle};

/// Collision between two triangles with the separating axis theorem.
///
/// Contacts discarded by one-sided triangles still count as a geometric contact for boolean
/// queries, but nothing is recorded for the other query types.
#[derive(Copy, Clone, Debug, Default)]
pub struct TriangleTriangleAlgorithm {
    /// Options forwarded to the SAT contact generator.
    pub options: TriangleTriangleOptions,
}

impl TriangleTriangleAlgorithm {
    /// Creates the algorithm with the given options.
    pub fn new(options: TriangleTriangleOptions) -> Self {
        Self { options }
    }

    fn world_triangle(&self, set: &ContactSet, first: bool) -> Result<Triangle, QueryError> {
        let object = if first { &set.object_a } else { &set.object_b };
        let triangle = object
            .shape
            .as_triangle()
            .ok_or(QueryError::UnexpectedShape {
                algorithm: self.name(),
                expected: ShapeType::Triangle,
                found: object.shape_type(),
            })?;

        Ok(triangle.scaled_and_transformed(&object.scale, &object.pose))
    }
}

impl CollisionAlgorithm for TriangleTriangleAlgorithm {
    fn name(&self) -> &'static str {
        "triangle-triangle"
    }

    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
        tolerances: &QueryTolerances,
    ) -> Result<(), QueryError> {
        let tri_a = self.world_triangle(set, true)?;
        let tri_b = self.world_triangle(set, false)?;

        match triangle_triangle_contact(&tri_a, &tri_b, &self.options, tolerances) {
            TriangleContact::None => merge_separation(set, query_type, tolerances),
            TriangleContact::Contact(contact) => {
                let contact = Contact::new(contact.point, contact.normal, contact.depth, false)
                    .with_features(contact.feature_a, contact.feature_b);
                set.merge(contact, query_type, tolerances);
                Ok(())
            }
            TriangleContact::Discarded => {
                if query_type == QueryType::Boolean {
                    set.set_have_contact();
                }
                Ok(())
            }
        }
    }
}
