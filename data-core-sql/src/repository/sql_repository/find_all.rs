use async_trait::async_trait;
use data_core_api::DataResult;
use data_core_db::{Entity, FindAll, Statement};

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn find_all_impl(repo: &SqlRepository<E>) -> DataResult<Vec<E>> {
        let rows = repo
            .fetch(Statement::plain(repo.statements().find_all.clone()))
            .await?;
        Self::map_rows(&rows)
    }
}

#[async_trait]
impl<E: Entity> FindAll<E> for SqlRepository<E> {
    async fn find_all(&self) -> DataResult<Vec<E>> {
        Self::find_all_impl(self).await
    }
}
