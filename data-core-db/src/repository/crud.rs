use crate::models::entity::Entity;

use super::{Count, DeleteAll, DeleteById, ExistsById, FindAll, FindById, FindPage, Save, SaveAll, Update};

/// Base contract every entity repository exposes.
///
/// Implemented automatically for any type providing the individual
/// operation traits, so callers can hold an `Arc<dyn CrudRepository<T>>`.
pub trait CrudRepository<T: Entity>:
    FindById<T>
    + ExistsById
    + FindAll<T>
    + Count
    + Save<T>
    + SaveAll<T>
    + Update<T>
    + DeleteById
    + DeleteAll
{
}

impl<T, R> CrudRepository<T> for R
where
    T: Entity,
    R: FindById<T>
        + ExistsById
        + FindAll<T>
        + Count
        + Save<T>
        + SaveAll<T>
        + Update<T>
        + DeleteById
        + DeleteAll,
{
}

/// CRUD plus offset pagination
pub trait PageableRepository<T: Entity>: CrudRepository<T> + FindPage<T> {}

impl<T, R> PageableRepository<T> for R
where
    T: Entity,
    R: CrudRepository<T> + FindPage<T>,
{
}
