use async_trait::async_trait;
use data_core_api::DataResult;
use data_core_db::{Entity, SaveAll};

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn save_all_impl(repo: &SqlRepository<E>, items: Vec<E>) -> DataResult<Vec<E>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        for item in items {
            saved_items.push(Self::save_impl(repo, item).await?);
        }
        Ok(saved_items)
    }
}

#[async_trait]
impl<E: Entity> SaveAll<E> for SqlRepository<E> {
    async fn save_all(&self, items: Vec<E>) -> DataResult<Vec<E>> {
        Self::save_all_impl(self, items).await
    }
}
