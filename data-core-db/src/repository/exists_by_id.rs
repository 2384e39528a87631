use async_trait::async_trait;
use data_core_api::DataResult;
use uuid::Uuid;

/// Generic repository trait for checking existence of an entity by its ID
#[async_trait]
pub trait ExistsById: Send + Sync {
    /// Check whether an entity with the given identifier exists
    ///
    /// # Returns
    /// * `Ok(bool)` - true if a row with this id exists
    /// * `Err` - An error if the query could not be executed
    async fn exists_by_id(&self, id: Uuid) -> DataResult<bool>;
}
