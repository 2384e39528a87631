use async_trait::async_trait;
use data_core_api::DataResult;

use crate::models::entity::Entity;

/// Generic repository trait for inserting several entities
///
/// Items are inserted one statement at a time, in order. The first failure
/// is returned and later items are not attempted; transaction boundaries
/// belong to the connection provider.
#[async_trait]
pub trait SaveAll<T: Entity>: Send + Sync {
    /// Insert multiple items
    ///
    /// # Arguments
    /// * `items` - A vector of entities to insert
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The saved entities, in input order
    /// * `Err` - An error if any insert could not be executed
    async fn save_all(&self, items: Vec<T>) -> DataResult<Vec<T>>;
}
