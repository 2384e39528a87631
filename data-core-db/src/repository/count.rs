use async_trait::async_trait;
use data_core_api::DataResult;

/// Generic repository trait for counting stored entities
#[async_trait]
pub trait Count: Send + Sync {
    async fn count(&self) -> DataResult<u64>;
}
