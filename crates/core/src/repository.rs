//! Persistence boundary.

use crate::entity::Entity;

/// Generic repository contract for an entity type.
///
/// The domain crates only depend on this trait; storage implementations live
/// in infrastructure. A loaded aggregate is mutated in place and handed back
/// through [`update`](Self::update).
pub trait Repository<T: Entity> {
    type Error: core::fmt::Debug;

    fn get_by_id(&self, id: &T::Id) -> Result<Option<T>, Self::Error>;
    fn get_all(&self) -> Result<Vec<T>, Self::Error>;
    fn add(&mut self, entity: T) -> Result<(), Self::Error>;
    fn update(&mut self, entity: T) -> Result<(), Self::Error>;
    fn delete(&mut self, entity: &T) -> Result<(), Self::Error>;
}
