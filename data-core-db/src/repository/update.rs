use async_trait::async_trait;
use data_core_api::DataResult;

use crate::models::entity::Entity;

/// Generic repository trait for updating an entity in place
#[async_trait]
pub trait Update<T: Entity>: Send + Sync {
    /// Overwrite every non-id column of the row identified by `item`'s id
    ///
    /// # Returns
    /// * `Ok(T)` - The updated entity
    /// * `Err(DataError::NotFound)` - If no row has this id
    /// * `Err` - An error if the update could not be executed
    async fn update(&self, item: T) -> DataResult<T>;
}
