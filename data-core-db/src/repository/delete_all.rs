use async_trait::async_trait;
use data_core_api::DataResult;

/// Generic repository trait for deleting every stored entity
#[async_trait]
pub trait DeleteAll: Send + Sync {
    /// # Returns
    /// * `Ok(u64)` - The number of rows deleted
    async fn delete_all(&self) -> DataResult<u64>;
}
