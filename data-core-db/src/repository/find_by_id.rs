use async_trait::async_trait;
use data_core_api::DataResult;
use uuid::Uuid;

use crate::models::entity::Entity;

/// Generic repository trait for finding entities by their ID
///
/// Returns an Option to handle cases where the entity might not exist.
///
/// # Type Parameters
/// * `T` - The entity type that must implement the Entity trait
///
/// # Example
/// ```ignore
/// impl<E: Entity> FindById<E> for SqlRepository<E> {
///     async fn find_by_id(&self, id: Uuid) -> DataResult<Option<E>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Entity>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed or the row could not be mapped
    async fn find_by_id(&self, id: Uuid) -> DataResult<Option<T>>;
}
