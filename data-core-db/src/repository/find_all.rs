use async_trait::async_trait;
use data_core_api::DataResult;

use crate::models::entity::Entity;

/// Generic repository trait for listing every stored entity
#[async_trait]
pub trait FindAll<T: Entity>: Send + Sync {
    /// Load all entities, in storage order
    async fn find_all(&self) -> DataResult<Vec<T>>;
}
