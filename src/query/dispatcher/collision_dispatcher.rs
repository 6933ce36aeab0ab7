use crate::query::{ContactSet, QueryError, QueryType};

/// Selects and runs the collision algorithm handling the objects of a contact set.
///
/// # Error Handling
///
/// `compute_collision` returns [`QueryError::UnsupportedShapePair`] when the dispatcher has no
/// algorithm for the pair of shape types. When dispatchers are chained with
/// [`chain()`](Self::chain), this error makes the next dispatcher of the chain handle the
/// query. Any other error is a precondition violation reported by the selected algorithm.
///
/// # Thread Safety
///
/// Dispatchers must be `Send + Sync` so they can be shared by threads running independent
/// queries.
pub trait CollisionDispatcher: Send + Sync {
    /// Computes the collision between `set.object_a` and `set.object_b`, merging the results
    /// into `set` following the rules of `query_type`.
    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
    ) -> Result<(), QueryError>;

    /// Construct a `CollisionDispatcher` that falls back on `other` for shape pairs not handled
    /// by `self`.
    fn chain<U: CollisionDispatcher>(self, other: U) -> CollisionDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        CollisionDispatcherChain(self, other)
    }
}

/// A chain of two collision dispatchers.
///
/// The first dispatcher is tried first. If it reports an unsupported shape pair, the second
/// dispatcher is tried.
pub struct CollisionDispatcherChain<T, U>(T, U);

impl<T, U> CollisionDispatcher for CollisionDispatcherChain<T, U>
where
    T: CollisionDispatcher,
    U: CollisionDispatcher,
{
    fn compute_collision(
        &self,
        set: &mut ContactSet,
        query_type: QueryType,
    ) -> Result<(), QueryError> {
        match self.0.compute_collision(set, query_type) {
            Err(QueryError::UnsupportedShapePair(..)) => self.1.compute_collision(set, query_type),
            result => result,
        }
    }
}
