//! Selection of the collision algorithm handling a pair of objects.

pub use self::collision_dispatcher::{CollisionDispatcher, CollisionDispatcherChain};
pub use self::default_collision_dispatcher::DefaultCollisionDispatcher;

mod collision_dispatcher;
mod default_collision_dispatcher;
