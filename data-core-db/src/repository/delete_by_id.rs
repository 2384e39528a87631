use async_trait::async_trait;
use data_core_api::DataResult;
use uuid::Uuid;

/// Generic repository trait for deleting an entity by its ID
#[async_trait]
pub trait DeleteById: Send + Sync {
    /// Delete the entity with the given identifier
    ///
    /// # Returns
    /// * `Ok(u64)` - The number of rows deleted (0 when the id is unknown)
    /// * `Err` - An error if the delete could not be executed
    async fn delete_by_id(&self, id: Uuid) -> DataResult<u64>;
}
