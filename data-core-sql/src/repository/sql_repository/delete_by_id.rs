use async_trait::async_trait;
use data_core_api::DataResult;
use data_core_db::{DeleteById, Entity, Statement};
use uuid::Uuid;

use super::repo_impl::SqlRepository;

impl<E: Entity> SqlRepository<E> {
    pub(super) async fn delete_by_id_impl(repo: &SqlRepository<E>, id: Uuid) -> DataResult<u64> {
        let statement = Statement::new(repo.statements().delete_by_id.clone(), vec![id.into()]);
        repo.execute(statement).await
    }
}

#[async_trait]
impl<E: Entity> DeleteById for SqlRepository<E> {
    async fn delete_by_id(&self, id: Uuid) -> DataResult<u64> {
        Self::delete_by_id_impl(self, id).await
    }
}
