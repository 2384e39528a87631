use async_trait::async_trait;
use data_core_api::DataResult;
use data_core_db::{DeleteAll, Entity, Statement};

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn delete_all_impl(repo: &SqlRepository<E>) -> DataResult<u64> {
        repo.execute(Statement::plain(repo.statements().delete_all.clone()))
            .await
    }
}

#[async_trait]
impl<E: Entity> DeleteAll for SqlRepository<E> {
    async fn delete_all(&self) -> DataResult<u64> {
        Self::delete_all_impl(self).await
    }
}
