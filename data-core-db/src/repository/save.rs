use async_trait::async_trait;
use data_core_api::DataResult;

use crate::models::entity::Entity;

/// Generic repository trait for inserting a single entity
///
/// # Example
/// ```ignore
/// let saved = repo.save(CountryModel::new("FR", "France")?).await?;
/// ```
#[async_trait]
pub trait Save<T: Entity>: Send + Sync {
    /// Insert an entity
    ///
    /// # Arguments
    /// * `item` - The entity to insert; its id is assigned by the caller
    ///
    /// # Returns
    /// * `Ok(T)` - The saved entity
    /// * `Err` - An error if the insert could not be executed
    async fn save(&self, item: T) -> DataResult<T>;
}
